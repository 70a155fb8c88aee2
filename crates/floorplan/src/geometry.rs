use serde::Serialize;
use std::fmt;

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset of this point relative to `origin`.
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x.saturating_sub(origin.x), self.y.saturating_sub(origin.y))
    }
}

/// Axis-aligned rectangle with a top-left origin and integer size.
///
/// All layout math in the editor happens on these. Rectangles are small `Copy`
/// snapshots: an edit replaces the whole value rather than patching fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Exclusive right edge, saturating at the `i32` range.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at the `i32` range.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Same size, new origin.
    pub fn with_origin(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Same origin, new size.
    pub fn with_size(self, width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// True iff both rectangles share an area larger than zero.
    ///
    /// Rectangles that only touch along an edge or a corner do not intersect,
    /// and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Whether `inner` lies entirely inside this rectangle (edges included).
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }

    /// Move (never resize) so the rectangle lies inside `outer`. When it is
    /// larger than `outer` along an axis it is pinned to `outer`'s near edge.
    pub fn clamped_within(self, outer: &Rect) -> Rect {
        let x = self.x.min(outer.right().saturating_sub(self.width)).max(outer.x);
        let y = self.y.min(outer.bottom().saturating_sub(self.height)).max(outer.y);
        self.with_origin(x, y)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}
