//! The overlay canvas: scene, active tool and engine in one place.

use crate::batch;
use crate::config::CanvasConfig;
use crate::cursor::CursorKind;
use crate::engine::Engine;
use crate::error::CanvasResult;
use crate::input::{Key, MouseButton, PointerEvent};
use crate::scene::Scene;
use crate::shapes::{Graphics, GraphicsStyle, ObjectId, SerializableColor, check_line_width};
use crate::tools::{PointerCapture, Tool, ToolContext, ToolKind, ToolManager};

/// Interactive overlay that routes host input to the active tool.
#[derive(Debug)]
pub struct Canvas<E: Engine> {
    scene: Scene,
    /// Style given to new objects and broadcast to the selection.
    style: GraphicsStyle,
    tools: ToolManager,
    capture: PointerCapture,
    cursor: CursorKind,
    config: CanvasConfig,
    engine: E,
}

impl<E: Engine> Canvas<E> {
    /// Create an empty canvas reporting to `engine`.
    ///
    /// Fails if the config carries an invalid line width.
    pub fn new(engine: E, config: CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;
        log::debug!("Canvas created with initial tool {:?}", config.initial_tool);
        Ok(Self {
            scene: Scene::new(),
            style: config.style(),
            tools: ToolManager::new(config.initial_tool),
            capture: Default::default(),
            cursor: CursorKind::Default,
            config,
            engine,
        })
    }

    /// Run `f` against the active tool with a context borrowing the canvas.
    /// Returns whether the tool handled the event and whether a creation
    /// gesture completed.
    fn dispatch(
        &mut self,
        f: impl FnOnce(&mut dyn Tool, &mut ToolContext<'_>) -> bool,
    ) -> (bool, bool) {
        let mut ctx = ToolContext::new(
            &mut self.scene,
            &mut self.capture,
            &mut self.cursor,
            self.style,
            &mut self.engine,
        );
        let handled = f(self.tools.active_mut(), &mut ctx);
        (handled, ctx.gesture_completed())
    }

    /// Primary button pressed. Other buttons are ignored.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if event.button != MouseButton::Primary {
            return false;
        }
        self.dispatch(|tool, ctx| tool.on_pointer_down(ctx, event)).0
    }

    /// Pointer moved. Swallowed while a secondary or middle button is held.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        if event.buttons.any_non_primary() {
            self.cursor = CursorKind::Default;
            return false;
        }
        self.dispatch(|tool, ctx| tool.on_pointer_move(ctx, event)).0
    }

    /// Primary button released. Other buttons are ignored.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        if event.button != MouseButton::Primary {
            return false;
        }
        let (handled, completed) = self.dispatch(|tool, ctx| tool.on_pointer_up(ctx, event));
        if completed && self.config.return_to_pointer && self.tool().is_creation() {
            self.set_tool(ToolKind::Pointer);
        }
        handled
    }

    /// Keyboard shortcuts: Escape unselects everything, Delete removes the
    /// selection. Returns true if the key was recognized.
    pub fn key_down(&mut self, key: &Key) -> bool {
        match key {
            Key::Escape => {
                batch::unselect_all(&mut self.scene);
                true
            }
            Key::Delete => {
                batch::delete_selection(&mut self.scene);
                true
            }
            Key::Other(_) => false,
        }
    }

    /// Active tool.
    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool()
    }

    /// Switch tools. Any gesture in progress is abandoned.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
        self.capture.release();
        self.cursor = CursorKind::Default;
    }

    /// The host lost pointer capture (e.g. focus change mid-drag).
    pub fn cancel_capture(&mut self) {
        if !self.capture.is_captured() {
            return;
        }
        log::debug!("Pointer capture lost by {:?}", self.capture.owner());
        self.dispatch(|tool, ctx| {
            tool.cancel(ctx);
            false
        });
    }

    pub fn line_width(&self) -> f64 {
        self.style.line_width
    }

    /// Set the default line width and apply it to the selection.
    pub fn set_line_width(&mut self, width: f64) -> CanvasResult<()> {
        check_line_width(width)?;
        self.style.line_width = width;
        batch::apply_line_width(&mut self.scene, width)?;
        Ok(())
    }

    pub fn object_color(&self) -> SerializableColor {
        self.style.color
    }

    /// Set the default color and apply it to the selection.
    pub fn set_object_color(&mut self, color: SerializableColor) {
        self.style.color = color;
        batch::apply_color(&mut self.scene, color);
    }

    /// Number of objects on the overlay.
    pub fn len(&self) -> usize {
        self.scene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.is_empty()
    }

    /// Object at a z-order position (0 is the bottom).
    pub fn get(&self, index: usize) -> Option<&Graphics> {
        self.scene.get(index)
    }

    pub fn selection_count(&self) -> usize {
        self.scene.selection_count()
    }

    pub fn selection(&self) -> impl Iterator<Item = &Graphics> {
        self.scene.selection()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Cursor the host should display.
    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }

    /// Tool currently holding the pointer, if any.
    pub fn capture_owner(&self) -> Option<ToolKind> {
        self.capture.owner()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Ids of objects changed since the last call.
    pub fn take_invalidated(&mut self) -> Vec<ObjectId> {
        self.scene.take_invalidated()
    }
}
