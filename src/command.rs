//! Headless draw target that records what it is asked to draw.

use crate::geom::{Point, Rect, Rgb};
use crate::render::DrawTarget;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<I> {
    /// Clip region change
    Clip(Option<Rect>),
    /// Solid fill
    Fill {
        /// Filled area
        rect: Rect,
        /// Fill color
        color: Rgb,
    },
    /// Rectangle outline
    Outline {
        /// Outlined area
        rect: Rect,
        /// Line color
        color: Rgb,
    },
    /// Image blit
    Blit {
        /// Image handle
        image: I,
        /// Top-left corner
        at: Point,
    },
    /// Text label
    Label {
        /// Label text
        text: String,
        /// Top-left corner
        at: Point,
        /// Font size
        size: u16,
    },
}

/// Draw target that stores commands instead of touching pixels.
///
/// Labels are measured with a fixed advance of half the font size per
/// character.
#[derive(Debug, Clone)]
pub struct CommandBuffer<I> {
    commands: Vec<DrawCommand<I>>,
}

impl<I> CommandBuffer<I> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        CommandBuffer { commands: Vec::new() }
    }

    /// Everything recorded so far, in order.
    pub fn commands(&self) -> &[DrawCommand<I>] {
        &self.commands
    }

    /// Removes and returns the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand<I>> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded blits.
    pub fn blit_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Blit { .. }))
            .count()
    }
}

impl<I> Default for CommandBuffer<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone> DrawTarget for CommandBuffer<I> {
    type Image = I;

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.commands.push(DrawCommand::Clip(clip));
    }

    fn fill(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn outline(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::Outline { rect, color });
    }

    fn blit(&mut self, image: &I, at: Point) {
        self.commands.push(DrawCommand::Blit {
            image: image.clone(),
            at,
        });
    }

    fn draw_label(&mut self, text: &str, at: Point, size: u16, _color: Rgb) -> Rect {
        self.commands.push(DrawCommand::Label {
            text: text.to_owned(),
            at,
            size,
        });
        let advance = (size as i32 / 2).max(1);
        Rect::new(at.x, at.y, advance * text.chars().count() as i32, size as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_box_grows_with_text() {
        let mut buf: CommandBuffer<()> = CommandBuffer::new();
        let r = buf.draw_label("10 , 12", Point::new(5, 6), 12, Rgb(200, 200, 200));
        assert_eq!(r, Rect::new(5, 6, 42, 12));
        assert_eq!(buf.take().len(), 1);
        assert!(buf.commands().is_empty());
    }
}
