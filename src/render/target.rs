use crate::geom::{Point, Rect, Rgb};

/// Surface the renderer paints into. Passed to the renderer at construction.
pub trait DrawTarget {
    /// Image type accepted by [`DrawTarget::blit`].
    type Image;

    /// Restricts subsequent drawing to `clip`; `None` lifts the restriction.
    fn set_clip(&mut self, clip: Option<Rect>);

    /// Fills `rect` with a solid color.
    fn fill(&mut self, rect: Rect, color: Rgb);

    /// Draws a 1 px outline of `rect`.
    fn outline(&mut self, rect: Rect, color: Rgb);

    /// Draws `image` with its top-left corner at `at`.
    fn blit(&mut self, image: &Self::Image, at: Point);

    /// Draws `text` with its top-left corner at `at` and returns the covered
    /// rectangle.
    fn draw_label(&mut self, text: &str, at: Point, size: u16, color: Rgb) -> Rect;
}

/// Shows finished regions to the user.
pub trait PresentSink {
    /// Flips `regions` to the display.
    fn present(&mut self, regions: &[Rect]);
}
