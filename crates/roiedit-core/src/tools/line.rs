//! Line tool.

use super::{Tool, ToolContext, ToolKind, add_new_object, finish_gesture};
use crate::batch;
use crate::cursor::CursorKind;
use crate::input::PointerEvent;
use crate::shapes::{GraphicsLine, GraphicsObject, ObjectId};
use kurbo::Vec2;

/// Handle dragged while the line is being drawn.
const END_HANDLE: usize = 2;

/// Draws one line and hands it to the engine.
///
/// Starting a new line discards everything else on the overlay; the finished
/// line stays selected until the next one replaces it.
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    pending: Option<ObjectId>,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for LineTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Line
    }

    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        batch::delete_all(ctx.scene);
        let p = event.position;
        let line = GraphicsLine::new(p, p + Vec2::new(1.0, 1.0), ctx.style);
        self.pending = add_new_object(ctx, ToolKind::Line, line);
        log::debug!("Line started at ({}, {})", p.x, p.y);
        self.pending.is_some()
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        *ctx.cursor = CursorKind::Pen;

        if !event.buttons.primary || !ctx.capture.is_held_by(ToolKind::Line) {
            return false;
        }
        let Some(line) = self.pending.and_then(|id| ctx.scene.find_mut(id)) else {
            return false;
        };
        match line.move_handle_to(event.position, END_HANDLE) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Line resize failed: {}", e);
                false
            }
        }
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) -> bool {
        finish_gesture(ctx);

        if let Some(id) = self.pending.take() {
            match ctx.scene.find(id).and_then(|o| o.as_line()) {
                Some(line) => {
                    let (start, end) = (line.start(), line.end());
                    log::debug!(
                        "Line finished: ({}, {}) -> ({}, {})",
                        start.x,
                        start.y,
                        end.x,
                        end.y
                    );
                    ctx.engine
                        .set_line(start.x as f32, start.y as f32, end.x as f32, end.y as f32);
                    ctx.engine.request_redraw();
                    ctx.complete_gesture();
                }
                None => log::warn!("Pending line {} vanished before release", id),
            }
        }
        true
    }

    fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CommandRecorder, EngineCommand};
    use crate::scene::Scene;
    use crate::shapes::{GraphicsRectangle, GraphicsStyle};
    use crate::tools::PointerCapture;
    use kurbo::Point;

    #[test]
    fn test_line_gesture_emits_line() {
        let mut scene = Scene::new();
        scene
            .add(GraphicsRectangle::new(0.0, 0.0, 5.0, 5.0, GraphicsStyle::default()))
            .unwrap();
        let mut capture = PointerCapture::default();
        let mut cursor = CursorKind::Default;
        let mut engine = CommandRecorder::new();
        let mut tool = LineTool::new();

        let mut ctx = ToolContext::new(
            &mut scene,
            &mut capture,
            &mut cursor,
            GraphicsStyle::default(),
            &mut engine,
        );
        assert!(tool.on_pointer_down(&mut ctx, &PointerEvent::down(Point::new(10.0, 10.0))));
        assert_eq!(ctx.scene.len(), 1);
        assert!(ctx.capture.is_held_by(ToolKind::Line));

        assert!(tool.on_pointer_move(&mut ctx, &PointerEvent::drag(Point::new(50.0, 30.0))));
        assert_eq!(*ctx.cursor, CursorKind::Pen);
        assert!(tool.on_pointer_up(&mut ctx, &PointerEvent::up(Point::new(50.0, 30.0))));
        assert!(ctx.gesture_completed());
        assert!(!ctx.capture.is_captured());
        assert_eq!(*ctx.cursor, CursorKind::Default);

        // The line persists and stays selected
        assert_eq!(ctx.scene.len(), 1);
        assert!(ctx.scene.get(0).unwrap().is_selected());

        assert_eq!(
            engine.commands(),
            &[
                EngineCommand::SetLine { x0: 10.0, y0: 10.0, x1: 50.0, y1: 30.0 },
                EngineCommand::RequestRedraw,
            ]
        );
    }

    #[test]
    fn test_hover_does_not_resize() {
        let mut scene = Scene::new();
        let mut capture = PointerCapture::default();
        let mut cursor = CursorKind::Default;
        let mut engine = CommandRecorder::new();
        let mut tool = LineTool::new();
        let mut ctx = ToolContext::new(
            &mut scene,
            &mut capture,
            &mut cursor,
            GraphicsStyle::default(),
            &mut engine,
        );

        assert!(!tool.on_pointer_move(&mut ctx, &PointerEvent::hover(Point::new(3.0, 3.0))));
        assert_eq!(*ctx.cursor, CursorKind::Pen);

        // Release without a gesture emits nothing
        assert!(tool.on_pointer_up(&mut ctx, &PointerEvent::up(Point::new(3.0, 3.0))));
        assert!(!ctx.gesture_completed());
        assert!(engine.commands().is_empty());
    }
}
