//! Interface to the viewport engine that consumes finalized geometry.

use serde::{Deserialize, Serialize};

/// Number of points in an anchor polygon.
pub const ANCHOR_POINT_COUNT: usize = 4;

/// The external viewport/engine the creation tools report to.
///
/// Coordinates are overlay-surface coordinates. The engine is assumed to be
/// ready for the whole lifetime of the canvas it is injected into.
pub trait Engine {
    /// A line gesture finished.
    fn set_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);

    /// A rectangle-anchor gesture finished. Points are in corner order
    /// top-left, top-right, bottom-right, bottom-left.
    fn set_anchor_points(&mut self, xs: [f32; ANCHOR_POINT_COUNT], ys: [f32; ANCHOR_POINT_COUNT]);

    /// Overlay-affecting state changed; the viewport should re-render.
    fn request_redraw(&mut self);
}

/// A recorded engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EngineCommand {
    SetLine { x0: f32, y0: f32, x1: f32, y1: f32 },
    SetAnchorPoints { xs: [f32; ANCHOR_POINT_COUNT], ys: [f32; ANCHOR_POINT_COUNT] },
    RequestRedraw,
}

/// Engine that records every call, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<EngineCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, oldest first.
    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    /// Remove and return all recorded commands.
    pub fn drain(&mut self) -> Vec<EngineCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Engine for CommandRecorder {
    fn set_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.commands.push(EngineCommand::SetLine { x0, y0, x1, y1 });
    }

    fn set_anchor_points(&mut self, xs: [f32; ANCHOR_POINT_COUNT], ys: [f32; ANCHOR_POINT_COUNT]) {
        self.commands.push(EngineCommand::SetAnchorPoints { xs, ys });
    }

    fn request_redraw(&mut self) {
        self.commands.push(EngineCommand::RequestRedraw);
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn set_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        (**self).set_line(x0, y0, x1, y1);
    }

    fn set_anchor_points(&mut self, xs: [f32; ANCHOR_POINT_COUNT], ys: [f32; ANCHOR_POINT_COUNT]) {
        (**self).set_anchor_points(xs, ys);
    }

    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut engine = CommandRecorder::new();
        engine.set_line(1.0, 2.0, 3.0, 4.0);
        engine.request_redraw();
        assert_eq!(
            engine.commands(),
            &[
                EngineCommand::SetLine { x0: 1.0, y0: 2.0, x1: 3.0, y1: 4.0 },
                EngineCommand::RequestRedraw,
            ]
        );
        assert_eq!(engine.drain().len(), 2);
        assert!(engine.commands().is_empty());
    }

    #[test]
    fn test_boxed_engine_forwards() {
        let mut engine: Box<CommandRecorder> = Box::default();
        Engine::request_redraw(&mut engine);
        assert_eq!(engine.commands(), &[EngineCommand::RequestRedraw]);
    }

    #[test]
    fn test_command_json() {
        let json = serde_json::to_string(&EngineCommand::RequestRedraw).unwrap();
        assert_eq!(json, r#"{"command":"request_redraw"}"#);
    }
}
