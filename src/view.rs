//! Camera and viewport.
//!
//! The camera is a rectangle in projected world-pixel space whose origin is
//! the anchor of cell (0, 0). The viewport is the fixed screen rectangle the
//! camera is shown in. Both share one size.

use crate::geom::{Point, Rect};
use crate::input::Direction;

/// Fixed screen rectangle the camera is projected into. Also the clip region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    rect: Rect,
}

impl Viewport {
    /// Creates a viewport. Panics when the size is not positive.
    pub fn new(rect: Rect) -> Self {
        assert!(
            rect.w > 0 && rect.h > 0,
            "viewport size must be positive, got {}x{}",
            rect.w,
            rect.h
        );
        Viewport { rect }
    }

    /// Screen rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// A camera at world position `(x, y)` sized to this viewport.
    pub fn camera_at(&self, x: i32, y: i32) -> Camera {
        Camera::new(Rect::new(x, y, self.rect.w, self.rect.h))
    }

    /// Offset from projected world pixels to screen pixels for `camera`.
    #[inline]
    pub fn translation(&self, camera: &Camera) -> Point {
        let c = camera.rect();
        Point::new(
            self.rect.left().saturating_sub(c.left()),
            self.rect.top().saturating_sub(c.top()),
        )
    }

    /// Converts a screen point to projected world pixels under `camera`.
    #[inline]
    pub fn screen_to_world(&self, camera: &Camera, p: Point) -> Point {
        let t = self.translation(camera);
        Point::new(p.x.saturating_sub(t.x), p.y.saturating_sub(t.y))
    }
}

/// Movable view rectangle plus a flag telling the renderer to repaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    rect: Rect,
    dirty: bool,
}

impl Camera {
    /// Creates a camera. It starts dirty so the first frame is painted.
    pub fn new(rect: Rect) -> Self {
        Camera { rect, dirty: true }
    }

    /// Current rectangle in world pixels.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Top-left corner in world pixels.
    #[inline]
    pub fn position(&self) -> Point {
        self.rect.top_left()
    }

    /// True when the geometry changed since the last completed render.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Translates by a pixel delta. No clamping against the map.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.translate(dx, dy);
        self.dirty = true;
    }

    /// Moves the top-left corner to `(x, y)`.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
        self.dirty = true;
    }

    /// One input step: `direction` scaled by `velocity` pixels.
    pub fn step(&mut self, direction: Direction, velocity: i32) {
        let (dx, dy) = direction.delta();
        self.move_by(dx.saturating_mul(velocity), dy.saturating_mul(velocity));
    }

    /// Marks the current geometry as rendered.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
