//! Graphics objects drawn on the overlay.

mod line;
mod rectangle;

pub use line::GraphicsLine;
pub use rectangle::{ACTIVE_CORNER, GraphicsRectangle};

use crate::cursor::CursorKind;
use crate::error::{CanvasError, CanvasResult};
use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum width of the band around a stroke that counts as a hit.
pub const HIT_TEST_WIDTH: f64 = 8.0;

/// Minimum side of a handle's square hit region.
pub const HANDLE_SIZE: f64 = 12.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Default object color of the editor (`#0079cb`).
    pub fn accent() -> Self {
        Self::new(0x00, 0x79, 0xcb, 255)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties applied to new objects and broadcast to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphicsStyle {
    /// Stroke width, never negative.
    pub line_width: f64,
    /// Stroke color.
    pub color: SerializableColor,
}

impl GraphicsStyle {
    /// Get the color as a peniko Color.
    pub fn color(&self) -> Color {
        self.color.into()
    }
}

impl Default for GraphicsStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            color: SerializableColor::accent(),
        }
    }
}

/// Identifier of a graphics object.
///
/// Assigned once at creation and never reused within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Allocate the next unused id.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};

        static ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of hit-testing a point against an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTest {
    /// The point is outside the object.
    Miss,
    /// The point is on the object but not on a handle.
    Body,
    /// The point is inside the square of the given 1-based handle.
    Handle(usize),
}

impl HitTest {
    /// Numeric form: `-1` for a miss, `0` for a body hit, else the handle number.
    pub fn code(self) -> i64 {
        match self {
            HitTest::Miss => -1,
            HitTest::Body => 0,
            HitTest::Handle(n) => n as i64,
        }
    }

    pub fn is_hit(self) -> bool {
        !matches!(self, HitTest::Miss)
    }
}

/// State shared by every graphics object.
#[derive(Debug, Clone)]
pub struct GraphicsBase {
    id: ObjectId,
    selected: bool,
    style: GraphicsStyle,
    needs_redraw: bool,
}

impl GraphicsBase {
    pub fn new(style: GraphicsStyle) -> Self {
        Self {
            id: ObjectId::next(),
            selected: false,
            style,
            needs_redraw: true,
        }
    }

    /// Mark the owning object as needing a redraw.
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    point.distance(a + seg * t)
}

/// Closed containment test (edges count as inside), unlike `Rect::contains`.
pub fn rect_contains(rect: Rect, point: Point) -> bool {
    let rect = rect.abs();
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Test if a line segment intersects or is inside a rectangle.
pub fn segment_intersects_rect(a: Point, b: Point, rect: Rect) -> bool {
    if rect_contains(rect, a) || rect_contains(rect, b) {
        return true;
    }
    let rect = rect.abs();
    let corners = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ];
    (0..4).any(|i| segments_intersect(a, b, corners[i], corners[(i + 1) % 4]))
}

/// Test if two line segments (a-b) and (c-d) intersect.
fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let cross = |o: Point, p: Point, q: Point| -> f64 {
        (p.x - o.x) * (q.y - o.y) - (p.y - o.y) * (q.x - o.x)
    };
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    // Collinear cases: check if endpoint lies on the other segment
    let on_segment = |p: Point, q: Point, r: Point| -> bool {
        r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
    };
    (d1.abs() < 1e-10 && on_segment(c, d, a))
        || (d2.abs() < 1e-10 && on_segment(c, d, b))
        || (d3.abs() < 1e-10 && on_segment(a, b, c))
        || (d4.abs() < 1e-10 && on_segment(a, b, d))
}

/// Reject negative or non-finite stroke widths.
pub fn check_line_width(width: f64) -> CanvasResult<()> {
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidLineWidth(width))
    }
}

/// Check a 1-based handle number against a handle count.
pub(crate) fn check_handle(handle: usize, count: usize) -> CanvasResult<()> {
    if (1..=count).contains(&handle) {
        Ok(())
    } else {
        Err(CanvasError::HandleOutOfRange { handle, count })
    }
}

/// Handle-based geometry contract shared by all graphics objects.
///
/// Handles are numbered from 1; every setter that changes selection, style
/// or geometry invalidates only the object it is called on.
pub trait GraphicsObject {
    fn base(&self) -> &GraphicsBase;

    fn base_mut(&mut self) -> &mut GraphicsBase;

    /// Number of manipulable handles.
    fn handle_count(&self) -> usize;

    /// Position of a 1-based handle.
    fn handle(&self, handle: usize) -> CanvasResult<Point>;

    /// Check if a point lies on the filled or stroked area.
    fn contains(&self, point: Point) -> bool;

    /// Test whether the object intersects a rectangle.
    fn intersects_with(&self, rect: Rect) -> bool;

    /// Translate all geometry.
    fn move_by(&mut self, dx: f64, dy: f64);

    /// Reposition a single handle.
    fn move_handle_to(&mut self, point: Point, handle: usize) -> CanvasResult<()>;

    /// Resize cursor for a handle.
    fn handle_cursor(&self, handle: usize) -> CursorKind;

    /// Restore ordering invariants after an interactive resize.
    fn normalize(&mut self) {}

    /// Outline in overlay coordinates, for the host to stroke.
    fn to_path(&self) -> BezPath;

    fn id(&self) -> ObjectId {
        self.base().id
    }

    fn is_selected(&self) -> bool {
        self.base().selected
    }

    fn set_selected(&mut self, selected: bool) {
        let base = self.base_mut();
        if base.selected != selected {
            base.selected = selected;
            base.invalidate();
        }
    }

    fn style(&self) -> GraphicsStyle {
        self.base().style
    }

    fn line_width(&self) -> f64 {
        self.base().style.line_width
    }

    fn set_line_width(&mut self, width: f64) -> CanvasResult<()> {
        check_line_width(width)?;
        let base = self.base_mut();
        base.style.line_width = width;
        base.invalidate();
        Ok(())
    }

    fn color(&self) -> SerializableColor {
        self.base().style.color
    }

    fn set_color(&mut self, color: SerializableColor) {
        let base = self.base_mut();
        base.style.color = color;
        base.invalidate();
    }

    /// Check whether the object changed since the last call, clearing the flag.
    fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.base_mut().needs_redraw)
    }

    /// Width of the band around strokes that counts as a hit.
    fn hit_test_width(&self) -> f64 {
        HIT_TEST_WIDTH.max(self.line_width())
    }

    /// Square hit region of a 1-based handle.
    fn handle_rect(&self, handle: usize) -> CanvasResult<Rect> {
        let center = self.handle(handle)?;
        // Handles keep a constant size unless the stroke is wider.
        let size = HANDLE_SIZE.max(self.line_width() * 1.1);
        Ok(Rect::from_center_size(center, (size, size)))
    }

    /// Tracker squares to paint while the object is selected.
    fn handle_rects(&self) -> Vec<Rect> {
        (1..=self.handle_count())
            .filter_map(|n| self.handle_rect(n).ok())
            .collect()
    }

    /// Classify a point as handle hit, body hit, or miss.
    fn hit_test(&self, point: Point) -> HitTest {
        let handle = (1..=self.handle_count()).find(|&n| {
            self.handle_rect(n)
                .map(|rect| rect_contains(rect, point))
                .unwrap_or(false)
        });
        match handle {
            Some(n) => HitTest::Handle(n),
            None if self.contains(point) => HitTest::Body,
            None => HitTest::Miss,
        }
    }
}

/// Enum wrapper for all graphics object types.
#[derive(Debug, Clone)]
pub enum Graphics {
    Line(GraphicsLine),
    Rectangle(GraphicsRectangle),
}

impl Graphics {
    /// Short type name, for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Graphics::Line(_) => "line",
            Graphics::Rectangle(_) => "rectangle",
        }
    }

    pub fn as_line(&self) -> Option<&GraphicsLine> {
        match self {
            Graphics::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&GraphicsRectangle> {
        match self {
            Graphics::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

impl From<GraphicsLine> for Graphics {
    fn from(line: GraphicsLine) -> Self {
        Graphics::Line(line)
    }
}

impl From<GraphicsRectangle> for Graphics {
    fn from(rect: GraphicsRectangle) -> Self {
        Graphics::Rectangle(rect)
    }
}

impl GraphicsObject for Graphics {
    fn base(&self) -> &GraphicsBase {
        match self {
            Graphics::Line(g) => g.base(),
            Graphics::Rectangle(g) => g.base(),
        }
    }

    fn base_mut(&mut self) -> &mut GraphicsBase {
        match self {
            Graphics::Line(g) => g.base_mut(),
            Graphics::Rectangle(g) => g.base_mut(),
        }
    }

    fn handle_count(&self) -> usize {
        match self {
            Graphics::Line(g) => g.handle_count(),
            Graphics::Rectangle(g) => g.handle_count(),
        }
    }

    fn handle(&self, handle: usize) -> CanvasResult<Point> {
        match self {
            Graphics::Line(g) => g.handle(handle),
            Graphics::Rectangle(g) => g.handle(handle),
        }
    }

    fn contains(&self, point: Point) -> bool {
        match self {
            Graphics::Line(g) => g.contains(point),
            Graphics::Rectangle(g) => g.contains(point),
        }
    }

    fn intersects_with(&self, rect: Rect) -> bool {
        match self {
            Graphics::Line(g) => g.intersects_with(rect),
            Graphics::Rectangle(g) => g.intersects_with(rect),
        }
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        match self {
            Graphics::Line(g) => g.move_by(dx, dy),
            Graphics::Rectangle(g) => g.move_by(dx, dy),
        }
    }

    fn move_handle_to(&mut self, point: Point, handle: usize) -> CanvasResult<()> {
        match self {
            Graphics::Line(g) => g.move_handle_to(point, handle),
            Graphics::Rectangle(g) => g.move_handle_to(point, handle),
        }
    }

    fn handle_cursor(&self, handle: usize) -> CursorKind {
        match self {
            Graphics::Line(g) => g.handle_cursor(handle),
            Graphics::Rectangle(g) => g.handle_cursor(handle),
        }
    }

    fn normalize(&mut self) {
        match self {
            Graphics::Line(g) => g.normalize(),
            Graphics::Rectangle(g) => g.normalize(),
        }
    }

    fn to_path(&self) -> BezPath {
        match self {
            Graphics::Line(g) => g.to_path(),
            Graphics::Rectangle(g) => g.to_path(),
        }
    }
}
