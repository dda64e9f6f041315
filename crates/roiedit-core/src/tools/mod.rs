//! Tool system for the overlay.
//!
//! Tools interpret pointer events against the scene. All of them share the
//! same three entry points and report whether they handled the event; none of
//! them return errors to the caller.

mod line;
mod pointer;
mod rectangle;

pub use line::LineTool;
pub use pointer::{PointerTool, SelectionMode};
pub use rectangle::{AnchorTool, ControlTool};

use crate::batch;
use crate::cursor::CursorKind;
use crate::engine::Engine;
use crate::input::PointerEvent;
use crate::scene::Scene;
use crate::shapes::{Graphics, GraphicsObject, GraphicsStyle, ObjectId};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    /// Select, move and resize existing objects.
    #[default]
    Pointer,
    /// Draw a single line and hand it to the engine.
    Line,
    /// Draw a rectangle whose corners become the engine's anchor polygon.
    Anchor,
    /// Draw a persistent control rectangle.
    Control,
}

impl ToolKind {
    /// Check if this tool creates new objects.
    pub fn is_creation(self) -> bool {
        !matches!(self, ToolKind::Pointer)
    }
}

/// Exclusive ownership of pointer events by the gesture that began them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerCapture {
    owner: Option<ToolKind>,
}

impl PointerCapture {
    /// Start capturing on behalf of a tool.
    pub fn acquire(&mut self, owner: ToolKind) {
        if let Some(previous) = self.owner.replace(owner) {
            if previous != owner {
                log::debug!("Pointer capture moved from {:?} to {:?}", previous, owner);
            }
        }
    }

    /// Stop capturing.
    pub fn release(&mut self) {
        self.owner = None;
    }

    pub fn is_captured(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owner(&self) -> Option<ToolKind> {
        self.owner
    }

    pub fn is_held_by(&self, tool: ToolKind) -> bool {
        self.owner == Some(tool)
    }
}

/// Everything a tool may touch while handling one event.
pub struct ToolContext<'a> {
    pub scene: &'a mut Scene,
    pub capture: &'a mut PointerCapture,
    pub cursor: &'a mut CursorKind,
    /// Style defaults for new objects.
    pub style: GraphicsStyle,
    pub engine: &'a mut dyn Engine,
    completed: bool,
}

impl<'a> ToolContext<'a> {
    pub fn new(
        scene: &'a mut Scene,
        capture: &'a mut PointerCapture,
        cursor: &'a mut CursorKind,
        style: GraphicsStyle,
        engine: &'a mut dyn Engine,
    ) -> Self {
        Self {
            scene,
            capture,
            cursor,
            style,
            engine,
            completed: false,
        }
    }

    /// Report that a creation gesture delivered its result.
    pub fn complete_gesture(&mut self) {
        self.completed = true;
    }

    pub fn gesture_completed(&self) -> bool {
        self.completed
    }
}

/// Common interface of all tools.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Primary button pressed.
    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool;

    /// Pointer moved with no secondary or middle button held.
    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool;

    /// Primary button released.
    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) -> bool {
        finish_gesture(ctx);
        true
    }

    /// The host lost pointer capture mid-gesture.
    fn cancel(&mut self, ctx: &mut ToolContext<'_>) {
        finish_gesture(ctx);
        self.reset();
    }

    /// Forget any gesture in progress (the tool is being switched away from).
    fn reset(&mut self) {}
}

/// Default end of a gesture: normalize the most recently added object, reset
/// the cursor and release the pointer.
pub fn finish_gesture(ctx: &mut ToolContext<'_>) {
    if let Some(last) = ctx.scene.last_mut() {
        last.normalize();
    }
    *ctx.cursor = CursorKind::Default;
    ctx.capture.release();
}

/// Add a freshly created object as the only selected one and capture the
/// pointer for the creating tool.
pub fn add_new_object(
    ctx: &mut ToolContext<'_>,
    owner: ToolKind,
    object: impl Into<Graphics>,
) -> Option<ObjectId> {
    let mut object = object.into();
    batch::unselect_all(ctx.scene);
    object.set_selected(true);
    match ctx.scene.add(object) {
        Ok(id) => {
            ctx.capture.acquire(owner);
            Some(id)
        }
        Err(e) => {
            log::error!("Failed to add new object: {}", e);
            None
        }
    }
}

/// Owns one instance of every tool and tracks which one is active.
#[derive(Debug, Default)]
pub struct ToolManager {
    current: ToolKind,
    pointer: PointerTool,
    line: LineTool,
    anchor: AnchorTool,
    control: ControlTool,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new(initial: ToolKind) -> Self {
        Self {
            current: initial,
            ..Self::default()
        }
    }

    /// Currently selected tool.
    pub fn current_tool(&self) -> ToolKind {
        self.current
    }

    /// Set the current tool, dropping the old tool's gesture state.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != self.current {
            log::debug!("Tool changed: {:?} -> {:?}", self.current, tool);
        }
        self.active_mut().reset();
        self.current = tool;
    }

    pub fn pointer(&self) -> &PointerTool {
        &self.pointer
    }

    /// The active tool.
    pub fn active_mut(&mut self) -> &mut dyn Tool {
        match self.current {
            ToolKind::Pointer => &mut self.pointer,
            ToolKind::Line => &mut self.line,
            ToolKind::Anchor => &mut self.anchor,
            ToolKind::Control => &mut self.control,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_selection() {
        let mut tm = ToolManager::new(ToolKind::Pointer);
        assert_eq!(tm.current_tool(), ToolKind::Pointer);
        assert_eq!(tm.active_mut().kind(), ToolKind::Pointer);

        tm.set_tool(ToolKind::Anchor);
        assert_eq!(tm.current_tool(), ToolKind::Anchor);
        assert_eq!(tm.active_mut().kind(), ToolKind::Anchor);
    }

    #[test]
    fn test_capture_token() {
        let mut capture = PointerCapture::default();
        assert!(!capture.is_captured());

        capture.acquire(ToolKind::Line);
        assert!(capture.is_captured());
        assert!(capture.is_held_by(ToolKind::Line));
        assert!(!capture.is_held_by(ToolKind::Pointer));

        capture.release();
        assert_eq!(capture.owner(), None);
    }

    #[test]
    fn test_creation_kinds() {
        assert!(!ToolKind::Pointer.is_creation());
        assert!(ToolKind::Line.is_creation());
        assert!(ToolKind::Anchor.is_creation());
        assert!(ToolKind::Control.is_creation());
    }
}
