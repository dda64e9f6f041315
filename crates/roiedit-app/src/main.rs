//! Main application entry point.

use roiedit_app::{ShortcutRegistry, run_file};

fn main() {
    env_logger::init();
    log::info!("Starting roiedit");

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: roiedit <session.json>");
        ShortcutRegistry::print_all();
        std::process::exit(2);
    };

    let replay = match run_file(&path) {
        Ok(replay) => replay,
        Err(e) => {
            log::error!("Replay of {} failed: {}", path, e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    for command in &replay.commands {
        match serde_json::to_string(command) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to serialize {:?}: {}", command, e),
        }
    }
    match serde_json::to_string_pretty(&replay.summary) {
        Ok(summary) => println!("{}", summary),
        Err(e) => log::error!("Failed to serialize scene summary: {}", e),
    }
}
