//! Recorded input sessions and their replay.

use kurbo::{Point, Shape};
use roiedit_core::{
    ButtonState, Canvas, CanvasConfig, CanvasError, CommandRecorder, EngineCommand, GraphicsObject,
    Key, MouseButton, PointerEvent, SerializableColor, ToolKind,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or replaying a session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session format error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

fn primary() -> MouseButton {
    MouseButton::Primary
}

/// One recorded host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Switch the active tool.
    Tool { tool: ToolKind },
    /// Button pressed.
    Down {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: MouseButton,
    },
    /// Pointer moved; `buttons` lists what is held (nothing by default).
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        buttons: ButtonState,
    },
    /// Button released.
    Up {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: MouseButton,
    },
    /// Key pressed, by host key name.
    Key { key: String },
    LineWidth { width: f64 },
    /// Object color as `#rrggbb` or `#rrggbbaa`.
    Color { color: String },
    /// The host lost pointer capture.
    CancelCapture,
}

/// A session file: canvas settings plus the events to replay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub config: CanvasConfig,
    pub events: Vec<SessionEvent>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay every event against a fresh canvas.
    pub fn replay(&self) -> Result<Replay, AppError> {
        let mut canvas = Canvas::new(CommandRecorder::new(), self.config.clone())?;
        log::info!("Replaying {} event(s)", self.events.len());

        for (index, event) in self.events.iter().enumerate() {
            let handled = apply(&mut canvas, event)?;
            log::debug!("Event {}: {:?} (handled: {})", index, event, handled);
        }

        let summary = SceneSummary::from_canvas(&canvas);
        let commands = canvas.engine_mut().drain();
        log::info!(
            "Replay finished: {} engine command(s), {} object(s) on the overlay",
            commands.len(),
            summary.objects.len()
        );
        Ok(Replay { commands, summary })
    }
}

fn apply(canvas: &mut Canvas<CommandRecorder>, event: &SessionEvent) -> Result<bool, AppError> {
    let handled = match event {
        SessionEvent::Tool { tool } => {
            canvas.set_tool(*tool);
            true
        }
        SessionEvent::Down { x, y, button } => canvas.pointer_down(&PointerEvent {
            position: Point::new(*x, *y),
            button: *button,
            buttons: ButtonState::NONE.with(*button, true),
        }),
        SessionEvent::Move { x, y, buttons } => canvas.pointer_move(&PointerEvent {
            position: Point::new(*x, *y),
            button: MouseButton::Primary,
            buttons: *buttons,
        }),
        SessionEvent::Up { x, y, button } => {
            canvas.pointer_up(&PointerEvent::with_button(Point::new(*x, *y), *button, false))
        }
        SessionEvent::Key { key } => canvas.key_down(&Key::from_name(key)),
        SessionEvent::LineWidth { width } => {
            canvas.set_line_width(*width)?;
            true
        }
        SessionEvent::Color { color } => {
            let color = SerializableColor::from_hex(color)
                .ok_or_else(|| AppError::InvalidColor(color.clone()))?;
            canvas.set_object_color(color);
            true
        }
        SessionEvent::CancelCapture => {
            canvas.cancel_capture();
            true
        }
    };
    Ok(handled)
}

/// Final state of one overlay object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSummary {
    pub id: u64,
    pub kind: &'static str,
    pub selected: bool,
    /// Handle positions in handle order.
    pub handles: Vec<Point>,
    /// Bounds as `[x0, y0, x1, y1]`.
    pub bounds: [f64; 4],
}

/// Final state of the overlay after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub tool: ToolKind,
    pub line_width: f64,
    pub selection_count: usize,
    pub objects: Vec<ObjectSummary>,
}

impl SceneSummary {
    pub fn from_canvas(canvas: &Canvas<CommandRecorder>) -> Self {
        let objects = canvas
            .scene()
            .iter()
            .map(|o| {
                let b = o.to_path().bounding_box();
                ObjectSummary {
                    id: o.id().0,
                    kind: o.kind_name(),
                    selected: o.is_selected(),
                    handles: (1..=o.handle_count()).filter_map(|n| o.handle(n).ok()).collect(),
                    bounds: [b.x0, b.y0, b.x1, b.y1],
                }
            })
            .collect();
        Self {
            tool: canvas.tool(),
            line_width: canvas.line_width(),
            selection_count: canvas.selection_count(),
            objects,
        }
    }
}

/// Result of replaying a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replay {
    /// Engine calls, oldest first.
    pub commands: Vec<EngineCommand>,
    pub summary: SceneSummary,
}

/// Load a session file and replay it.
pub fn run_file(path: impl AsRef<Path>) -> Result<Replay, AppError> {
    let path = path.as_ref();
    log::info!("Loading session from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    Session::from_json(&json)?.replay()
}
