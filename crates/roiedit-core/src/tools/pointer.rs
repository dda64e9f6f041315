//! Pointer tool: select, move and resize.

use super::{Tool, ToolContext, ToolKind};
use crate::batch;
use crate::cursor::CursorKind;
use crate::input::PointerEvent;
use crate::shapes::{GraphicsObject, HitTest, ObjectId};
use kurbo::Point;

/// What a pointer drag is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    None,
    /// The remembered object is moved.
    Move,
    /// A handle of the remembered object is dragged.
    Size,
}

/// Selects the topmost object under the pointer, then moves or resizes it.
#[derive(Debug, Clone, Default)]
pub struct PointerTool {
    mode: SelectionMode,
    /// Object moved or resized by the current gesture.
    target: Option<ObjectId>,
    handle: usize,
    last_point: Point,
}

impl PointerTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Object being dragged, if any.
    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    fn hover_cursor(ctx: &ToolContext<'_>, point: Point) -> CursorKind {
        ctx.scene
            .iter()
            .rev()
            .find_map(|o| match o.hit_test(point) {
                HitTest::Handle(n) => Some(o.handle_cursor(n)),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl Tool for PointerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pointer
    }

    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        let point = event.position;
        self.mode = SelectionMode::None;
        self.target = None;

        // Topmost first: a handle hit resizes, a body hit moves.
        let hit = ctx
            .scene
            .iter()
            .rev()
            .find_map(|o| match o.hit_test(point) {
                HitTest::Miss => None,
                hit => Some((o.id(), hit)),
            });

        let changed = match hit {
            Some((id, hit)) => {
                match hit {
                    HitTest::Handle(n) => {
                        self.mode = SelectionMode::Size;
                        self.handle = n;
                    }
                    _ => {
                        self.mode = SelectionMode::Move;
                        *ctx.cursor = CursorKind::Move;
                    }
                }
                self.target = Some(id);
                batch::unselect_all(ctx.scene);
                if let Some(object) = ctx.scene.find_mut(id) {
                    object.set_selected(true);
                }
                log::debug!("Pointer grabbed {} ({:?})", id, self.mode);
                true
            }
            None => {
                // Click on background
                batch::unselect_all(ctx.scene);
                false
            }
        };

        self.last_point = point;
        ctx.capture.acquire(ToolKind::Pointer);
        changed
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) -> bool {
        if event.buttons.any_non_primary() {
            *ctx.cursor = CursorKind::Default;
            return false;
        }

        let point = event.position;

        if !event.buttons.primary {
            *ctx.cursor = Self::hover_cursor(ctx, point);
            return false;
        }

        if !ctx.capture.is_held_by(ToolKind::Pointer) {
            return false;
        }

        let dx = point.x - self.last_point.x;
        let dy = point.y - self.last_point.y;
        self.last_point = point;

        let Some(id) = self.target else {
            return false;
        };
        let Some(object) = ctx.scene.find_mut(id) else {
            log::warn!("Dragged object {} is no longer in the scene", id);
            self.target = None;
            self.mode = SelectionMode::None;
            return false;
        };

        match self.mode {
            SelectionMode::Size => match object.move_handle_to(point, self.handle) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Resize of {} failed: {}", id, e);
                    false
                }
            },
            SelectionMode::Move => {
                object.move_by(dx, dy);
                true
            }
            SelectionMode::None => false,
        }
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) -> bool {
        if !ctx.capture.is_held_by(ToolKind::Pointer) {
            *ctx.cursor = CursorKind::Default;
            self.mode = SelectionMode::None;
            return false;
        }

        if let Some(id) = self.target.take() {
            // after resizing
            if let Some(object) = ctx.scene.find_mut(id) {
                object.normalize();
            }
        }

        ctx.capture.release();
        *ctx.cursor = CursorKind::Default;
        self.mode = SelectionMode::None;
        true
    }

    fn cancel(&mut self, ctx: &mut ToolContext<'_>) {
        // Only the dragged object is finalized.
        if let Some(object) = self.target.and_then(|id| ctx.scene.find_mut(id)) {
            object.normalize();
        }
        ctx.capture.release();
        *ctx.cursor = CursorKind::Default;
        self.reset();
    }

    fn reset(&mut self) {
        self.mode = SelectionMode::None;
        self.target = None;
    }
}
