//! Line segment.

use super::{
    GraphicsBase, GraphicsObject, GraphicsStyle, check_handle, point_to_segment_dist,
    segment_intersects_rect,
};
use crate::cursor::CursorKind;
use crate::error::CanvasResult;
use kurbo::{BezPath, Point, Rect};

/// A straight line between two endpoints.
///
/// Handle 1 is the start point, handle 2 the end point.
#[derive(Debug, Clone)]
pub struct GraphicsLine {
    base: GraphicsBase,
    start: Point,
    end: Point,
}

impl GraphicsLine {
    /// Create a new line.
    pub fn new(start: Point, end: Point, style: GraphicsStyle) -> Self {
        Self {
            base: GraphicsBase::new(style),
            start,
            end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl GraphicsObject for GraphicsLine {
    fn base(&self) -> &GraphicsBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GraphicsBase {
        &mut self.base
    }

    fn handle_count(&self) -> usize {
        2
    }

    fn handle(&self, handle: usize) -> CanvasResult<Point> {
        check_handle(handle, self.handle_count())?;
        Ok(if handle == 1 { self.start } else { self.end })
    }

    fn contains(&self, point: Point) -> bool {
        // A degenerate line has no stroke to hit.
        if self.length() < 1e-5 {
            return false;
        }
        point_to_segment_dist(point, self.start, self.end) <= self.hit_test_width() / 2.0
    }

    fn intersects_with(&self, rect: Rect) -> bool {
        segment_intersects_rect(self.start, self.end, rect)
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.start.x += dx;
        self.start.y += dy;
        self.end.x += dx;
        self.end.y += dy;
        self.base.invalidate();
    }

    fn move_handle_to(&mut self, point: Point, handle: usize) -> CanvasResult<()> {
        check_handle(handle, self.handle_count())?;
        if handle == 1 {
            self.start = point;
        } else {
            self.end = point;
        }
        self.base.invalidate();
        Ok(())
    }

    fn handle_cursor(&self, _handle: usize) -> CursorKind {
        CursorKind::Move
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}
