//! roiedit Core Library
//!
//! Interactive vector overlay for a medical-image viewport: a scene of lines
//! and rectangles, the tools that draw and edit them, and the engine interface
//! that receives the finished geometry.

pub mod batch;
pub mod canvas;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod input;
pub mod scene;
pub mod shapes;
pub mod tools;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use cursor::CursorKind;
pub use engine::{ANCHOR_POINT_COUNT, CommandRecorder, Engine, EngineCommand};
pub use error::{CanvasError, CanvasResult};
pub use input::{ButtonState, Key, MouseButton, PointerEvent};
pub use scene::Scene;
pub use shapes::{
    Graphics, GraphicsLine, GraphicsObject, GraphicsRectangle, GraphicsStyle, HitTest, ObjectId,
    SerializableColor,
};
pub use tools::{SelectionMode, ToolKind};
