//! Rectangle creation tools.

use super::{Tool, ToolContext, ToolKind, add_new_object, finish_gesture};
use crate::cursor::CursorKind;
use crate::engine::ANCHOR_POINT_COUNT;
use crate::input::PointerEvent;
use crate::shapes::{ACTIVE_CORNER, GraphicsObject, GraphicsRectangle, ObjectId};

/// Create a 1x1 rectangle at the click point.
fn begin(ctx: &mut ToolContext<'_>, owner: ToolKind, event: &PointerEvent) -> Option<ObjectId> {
    let p = event.position;
    let rect = GraphicsRectangle::new(p.x, p.y, p.x + 1.0, p.y + 1.0, ctx.style);
    let id = add_new_object(ctx, owner, rect);
    log::debug!("{:?} rectangle started at ({}, {})", owner, p.x, p.y);
    id
}

/// Drag the active corner of the pending rectangle to the pointer.
fn drag(
    ctx: &mut ToolContext<'_>,
    owner: ToolKind,
    pending: Option<ObjectId>,
    event: &PointerEvent,
) -> bool {
    *ctx.cursor = CursorKind::Crosshair;

    if !event.buttons.primary || !ctx.capture.is_held_by(owner) {
        return false;
    }
    let Some(rect) = pending.and_then(|id| ctx.scene.find_mut(id)) else {
        return false;
    };
    match rect.move_handle_to(event.position, ACTIVE_CORNER) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Rectangle resize failed: {}", e);
            false
        }
    }
}

/// Draws a rectangle, sends its corners to the engine as the anchor polygon
/// and removes it again.
#[derive(Debug, Clone, Default)]
pub struct AnchorTool {
    pending: Option<ObjectId>,
}

impl AnchorTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for AnchorTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Anchor
    }

    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        // A press without a release in between leaves the old rectangle behind.
        if let Some(stale) = self.pending.take() {
            log::warn!("Discarding unfinished anchor rectangle {}", stale);
            ctx.scene.remove(stale);
        }
        self.pending = begin(ctx, ToolKind::Anchor, event);
        self.pending.is_some()
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        drag(ctx, ToolKind::Anchor, self.pending, event)
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) -> bool {
        finish_gesture(ctx);

        let Some(id) = self.pending.take() else {
            return true;
        };
        let Some(corners) = ctx
            .scene
            .find(id)
            .and_then(|o| o.as_rectangle())
            .map(|r| r.corners())
        else {
            log::warn!("Pending anchor rectangle {} vanished before release", id);
            return true;
        };

        let mut xs = [0.0f32; ANCHOR_POINT_COUNT];
        let mut ys = [0.0f32; ANCHOR_POINT_COUNT];
        for (i, corner) in corners.iter().enumerate() {
            xs[i] = corner.x as f32;
            ys[i] = corner.y as f32;
        }
        log::debug!("Anchor polygon: xs={:?} ys={:?}", xs, ys);
        ctx.engine.set_anchor_points(xs, ys);
        ctx.engine.request_redraw();

        // The rectangle was only input for the engine.
        ctx.scene.remove(id);
        ctx.complete_gesture();
        true
    }

    fn cancel(&mut self, ctx: &mut ToolContext<'_>) {
        // Never reported, so never kept.
        if let Some(id) = self.pending.take() {
            ctx.scene.remove(id);
        }
        *ctx.cursor = CursorKind::Default;
        ctx.capture.release();
    }

    fn reset(&mut self) {
        self.pending = None;
    }
}

/// Draws a control rectangle that stays on the overlay for later editing.
#[derive(Debug, Clone, Default)]
pub struct ControlTool {
    pending: Option<ObjectId>,
}

impl ControlTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for ControlTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Control
    }

    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        self.pending = begin(ctx, ToolKind::Control, event);
        self.pending.is_some()
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        drag(ctx, ToolKind::Control, self.pending, event)
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) -> bool {
        finish_gesture(ctx);

        if let Some(id) = self.pending.take() {
            if ctx.scene.contains_id(id) {
                log::debug!("Control rectangle {} placed", id);
                ctx.engine.request_redraw();
                ctx.complete_gesture();
            }
        }
        true
    }

    fn reset(&mut self) {
        self.pending = None;
    }
}
