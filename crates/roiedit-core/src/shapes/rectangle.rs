//! Axis-aligned rectangle.

use super::{GraphicsBase, GraphicsObject, GraphicsStyle, check_handle, rect_contains};
use crate::cursor::CursorKind;
use crate::error::CanvasResult;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};

/// Handle dragged by the rectangle creation tools (bottom-right corner).
pub const ACTIVE_CORNER: usize = 3;

/// A rectangle defined by its four edges.
///
/// Handles are the corners in winding order: 1 = top-left, 2 = top-right,
/// 3 = bottom-right, 4 = bottom-left. During a drag the edges may cross;
/// `normalize` restores `left <= right` and `top <= bottom`.
#[derive(Debug, Clone)]
pub struct GraphicsRectangle {
    base: GraphicsBase,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl GraphicsRectangle {
    /// Create a new rectangle.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64, style: GraphicsStyle) -> Self {
        Self {
            base: GraphicsBase::new(style),
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Get the rectangle as a kurbo Rect (always with positive size).
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom).abs()
    }

    /// Corners of the normalized rectangle in handle order (TL, TR, BR, BL).
    pub fn corners(&self) -> [Point; 4] {
        let r = self.as_rect();
        [
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x1, r.y1),
            Point::new(r.x0, r.y1),
        ]
    }
}

impl GraphicsObject for GraphicsRectangle {
    fn base(&self) -> &GraphicsBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GraphicsBase {
        &mut self.base
    }

    fn handle_count(&self) -> usize {
        4
    }

    fn handle(&self, handle: usize) -> CanvasResult<Point> {
        check_handle(handle, self.handle_count())?;
        let point = match handle {
            1 => Point::new(self.left, self.top),
            2 => Point::new(self.right, self.top),
            3 => Point::new(self.right, self.bottom),
            _ => Point::new(self.left, self.bottom),
        };
        Ok(point)
    }

    fn contains(&self, point: Point) -> bool {
        rect_contains(self.as_rect(), point)
    }

    fn intersects_with(&self, rect: Rect) -> bool {
        let a = self.as_rect();
        let b = rect.abs();
        a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
        self.base.invalidate();
    }

    fn move_handle_to(&mut self, point: Point, handle: usize) -> CanvasResult<()> {
        check_handle(handle, self.handle_count())?;
        match handle {
            1 => {
                self.left = point.x;
                self.top = point.y;
            }
            2 => {
                self.right = point.x;
                self.top = point.y;
            }
            3 => {
                self.right = point.x;
                self.bottom = point.y;
            }
            _ => {
                self.left = point.x;
                self.bottom = point.y;
            }
        }
        self.base.invalidate();
        Ok(())
    }

    fn handle_cursor(&self, handle: usize) -> CursorKind {
        match handle {
            1 | 3 => CursorKind::ResizeNwse,
            2 | 4 => CursorKind::ResizeNesw,
            _ => CursorKind::Default,
        }
    }

    fn normalize(&mut self) {
        let mut changed = false;
        if self.left > self.right {
            std::mem::swap(&mut self.left, &mut self.right);
            changed = true;
        }
        if self.top > self.bottom {
            std::mem::swap(&mut self.top, &mut self.bottom);
            changed = true;
        }
        if changed {
            self.base.invalidate();
        }
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}
