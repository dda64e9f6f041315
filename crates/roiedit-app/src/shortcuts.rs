//! Keyboard shortcut registry and documentation.

use roiedit_core::Key;

/// A keyboard shortcut understood by the canvas.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }

    /// Key value delivered to the canvas for this shortcut.
    pub fn key(&self) -> Key {
        Key::from_name(self.key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Escape", "Unselect all objects"),
            Shortcut::new("Delete", "Delete selected objects"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.key, shortcut.description);
        }
        println!();
    }
}
