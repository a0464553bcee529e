//! Integer screen-space primitives.

use serde::{Deserialize, Serialize};

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: i32,
    /// Vertical position
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Axis-aligned pixel rectangle. `right` and `bottom` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub w: i32,
    /// Height in pixels
    pub h: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Left edge.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Top-left corner.
    #[inline]
    pub const fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left.
    pub const fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    /// Moves the rectangle in place.
    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Returns a copy grown by `dw`/`dh` around the same center.
    pub const fn inflate(&self, dw: i32, dh: i32) -> Rect {
        Rect::new(self.x - dw / 2, self.y - dh / 2, self.w + dw, self.h + dh)
    }

    /// True when the two rectangles share at least one pixel.
    #[inline]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// True when the point lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict_on_edges() {
        let view = Rect::new(200, 200, 800, 500);
        // touching the left edge from outside
        assert!(!Rect::new(70, 300, 130, 66).overlaps(&view));
        assert!(Rect::new(71, 300, 130, 66).overlaps(&view));
        // touching the bottom edge from outside
        assert!(!Rect::new(300, 700, 130, 66).overlaps(&view));
        assert!(!Rect::new(-1000, -1000, 130, 66).overlaps(&view));
    }

    #[test]
    fn corners_run_clockwise_from_top_left() {
        let r = Rect::new(0, -10, 800, 500);
        assert_eq!(
            r.corners(),
            [
                Point::new(0, -10),
                Point::new(800, -10),
                Point::new(800, 490),
                Point::new(0, 490)
            ]
        );
    }

    #[test]
    fn edges_saturate_at_the_end_of_the_axis() {
        let r = Rect::new(i32::MAX - 100, i32::MAX - 10, 800, 500);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);

        let mut r = Rect::new(i32::MIN + 5, 0, 800, 500);
        r.translate(-10, 0);
        assert_eq!(r.left(), i32::MIN);
        assert_eq!(Point::new(i32::MAX, 0).offset(1, -1), Point::new(i32::MAX, -1));
    }

    #[test]
    fn inflate_keeps_center() {
        assert_eq!(Rect::new(200, 200, 800, 500).inflate(2, 2), Rect::new(199, 199, 802, 502));
    }
}
