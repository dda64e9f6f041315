//! Cursor hints reported to the host.

use serde::{Deserialize, Serialize};

/// Cursor the host should show over the overlay surface.
///
/// The core only decides *which* cursor; loading and displaying it is up to
/// the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorKind {
    /// Regular arrow.
    #[default]
    Default,
    /// Four-way move cursor (dragging a whole object or a line endpoint).
    Move,
    /// Diagonal resize, top-left to bottom-right.
    ResizeNwse,
    /// Diagonal resize, top-right to bottom-left.
    ResizeNesw,
    /// Pen cursor used by the line tool.
    Pen,
    /// Crosshair used by the rectangle tools.
    Crosshair,
}
