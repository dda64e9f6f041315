//! Scene-wide selection, deletion and restyling helpers.

use crate::error::CanvasResult;
use crate::scene::Scene;
use crate::shapes::{GraphicsObject, SerializableColor};

/// Select every object.
pub fn select_all(scene: &mut Scene) {
    for object in scene.iter_mut() {
        object.set_selected(true);
    }
}

/// Unselect every object.
pub fn unselect_all(scene: &mut Scene) {
    for object in scene.iter_mut() {
        object.set_selected(false);
    }
}

/// Delete the selected objects, returning how many were removed.
pub fn delete_selection(scene: &mut Scene) -> usize {
    let removed = scene.remove_where(|o| o.is_selected());
    if removed > 0 {
        log::debug!("Deleted {} selected object(s)", removed);
    }
    removed
}

/// Delete every object.
pub fn delete_all(scene: &mut Scene) {
    if !scene.is_empty() {
        scene.clear();
    }
}

/// Apply a line width to the selection. Returns true if any object changed.
pub fn apply_line_width(scene: &mut Scene, width: f64) -> CanvasResult<bool> {
    let mut changed = false;
    for object in scene.selection_mut() {
        if object.line_width() != width {
            object.set_line_width(width)?;
            changed = true;
        }
    }
    Ok(changed)
}

/// Apply a color to the selection. Returns true if any object changed.
pub fn apply_color(scene: &mut Scene, color: SerializableColor) -> bool {
    let mut changed = false;
    for object in scene.selection_mut() {
        if object.color() != color {
            object.set_color(color);
            changed = true;
        }
    }
    changed
}
