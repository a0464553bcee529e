//! Macroquad implementations of the engine's collaborator traits.
//!
//! Tiles are painted into an offscreen render target that keeps its pixels
//! between frames; the presenter copies it to the window every frame, so a
//! clean camera costs one texture draw.

use std::path::Path;

use anyhow::{anyhow, Context};
use macroquad::prelude::*;

use crate::geom::{Point, Rect as PixelRect, Rgb};
use crate::input::{Command, Direction, InputSource, KeyRepeat};
use crate::render::{DrawTarget, PresentSink};
use crate::tileset::{Drawable, ImageProvider};

#[inline]
fn color(c: Rgb) -> Color {
    Color::from_rgba(c.0, c.1, c.2, 255)
}

impl Drawable for Texture2D {
    fn width(&self) -> u32 {
        Texture2D::width(self) as u32
    }

    fn height(&self) -> u32 {
        Texture2D::height(self) as u32
    }
}

/// Makes every pixel whose RGB equals `key` fully transparent.
pub fn apply_color_key(pixels: &mut [[u8; 4]], key: Rgb) {
    let Rgb(r, g, b) = key;
    for px in pixels.iter_mut().filter(|px| px[0] == r && px[1] == g && px[2] == b) {
        px[3] = 0;
    }
}

/// Loads PNG/BMP/... tiles from disk into GPU textures.
#[derive(Debug, Default)]
pub struct TextureProvider;

impl ImageProvider for TextureProvider {
    type Image = Texture2D;

    fn load(&mut self, path: &Path, color_key: Option<Rgb>) -> anyhow::Result<Texture2D> {
        let bytes = std::fs::read(path).with_context(|| format!("Reading image {}", path.display()))?;
        let mut image = Image::from_file_with_format(&bytes, None)
            .map_err(|e| anyhow!("Decoding image {}: {:?}", path.display(), e))?;

        if let Some(key) = color_key {
            apply_color_key(image.get_image_data_mut(), key);
        }

        let tex = Texture2D::from_image(&image);
        tex.set_filter(FilterMode::Nearest);
        Ok(tex)
    }
}

/// Persistent offscreen canvas the size of the window.
pub struct CanvasTarget {
    target: RenderTarget,
    camera: Camera2D,
    size: (f32, f32),
}

impl CanvasTarget {
    /// Creates a `width × height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let target = render_target(width, height);
        target.texture.set_filter(FilterMode::Nearest);

        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, width as f32, height as f32));
        camera.render_target = Some(target.clone());

        CanvasTarget {
            target,
            camera,
            size: (width as f32, height as f32),
        }
    }

    /// Presenter that shows this canvas in the window.
    pub fn presenter(&self) -> ScreenPresenter {
        ScreenPresenter {
            texture: self.target.texture.clone(),
            size: self.size,
            presented: 0,
        }
    }

    #[inline]
    fn activate(&self) {
        set_camera(&self.camera);
    }
}

impl DrawTarget for CanvasTarget {
    type Image = Texture2D;

    fn set_clip(&mut self, clip: Option<PixelRect>) {
        self.activate();
        // SAFETY: draw targets are only used on the main thread inside the macroquad context
        let mut gl = unsafe { get_internal_gl() };
        gl.flush();
        // GL scissor origin is the bottom-left corner
        let scissor = clip.map(|r| (r.x, self.size.1 as i32 - r.bottom(), r.w, r.h));
        gl.quad_gl.scissor(scissor);
    }

    fn fill(&mut self, rect: PixelRect, c: Rgb) {
        self.activate();
        draw_rectangle(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32, color(c));
    }

    fn outline(&mut self, rect: PixelRect, c: Rgb) {
        self.activate();
        draw_rectangle_lines(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32, 1.0, color(c));
    }

    fn blit(&mut self, image: &Texture2D, at: Point) {
        self.activate();
        draw_texture(image, at.x as f32, at.y as f32, WHITE);
    }

    fn draw_label(&mut self, text: &str, at: Point, size: u16, c: Rgb) -> PixelRect {
        self.activate();
        let dims = measure_text(text, None, size, 1.0);
        draw_text_ex(
            text,
            at.x as f32,
            at.y as f32 + dims.offset_y,
            TextParams {
                font_size: size,
                color: color(c),
                ..Default::default()
            },
        );
        PixelRect::new(at.x, at.y, dims.width.ceil() as i32, dims.height.ceil() as i32)
    }
}

/// Copies the canvas to the window.
///
/// Macroquad swaps whole frames, so [`ScreenPresenter::show`] runs every
/// frame; presented regions only feed the frame log.
pub struct ScreenPresenter {
    texture: Texture2D,
    size: (f32, f32),
    presented: usize,
}

impl ScreenPresenter {
    /// Shows the canvas. Call once per frame whether or not anything changed.
    pub fn show(&mut self) {
        if self.presented > 0 {
            tracing::trace!("showing canvas with {} fresh regions", self.presented);
            self.presented = 0;
        }
        set_default_camera();
        clear_background(BLACK);
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.size.0, self.size.1)),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

impl PresentSink for ScreenPresenter {
    fn present(&mut self, regions: &[PixelRect]) {
        self.presented += regions.len();
    }
}

/// Arrow keys with key repeat; Escape or the window close button quit.
pub struct KeyboardInput {
    repeats: [KeyRepeat; 4],
}

impl KeyboardInput {
    /// Repeat after `delay` seconds, then every `interval` seconds.
    pub fn new(delay: f64, interval: f64) -> Self {
        KeyboardInput {
            repeats: std::array::from_fn(|_| KeyRepeat::new(delay, interval)),
        }
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        KeyboardInput {
            repeats: Default::default(),
        }
    }
}

fn key_for(dir: Direction) -> KeyCode {
    match dir {
        Direction::Up => KeyCode::Up,
        Direction::Down => KeyCode::Down,
        Direction::Left => KeyCode::Left,
        Direction::Right => KeyCode::Right,
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self, out: &mut Vec<Command>) {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            out.push(Command::Quit);
            return;
        }

        let now = get_time();
        for (dir, repeat) in Direction::ALL.into_iter().zip(self.repeats.iter_mut()) {
            let presses = repeat.update(is_key_down(key_for(dir)), now);
            out.extend(std::iter::repeat(Command::Move(dir)).take(presses as usize));
        }
    }
}

/// Mouse position in whole window pixels.
pub fn cursor() -> Point {
    let (x, y) = mouse_position();
    Point::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_key_clears_only_exact_matches() {
        let mut px = [
            [255, 255, 255, 255],
            [254, 255, 255, 255],
            [255, 255, 254, 255],
            [10, 20, 30, 255],
            [255, 255, 255, 128],
        ];
        apply_color_key(&mut px, Rgb(255, 255, 255));
        assert_eq!(px[0], [255, 255, 255, 0]);
        assert_eq!(px[1][3], 255);
        assert_eq!(px[2][3], 255);
        assert_eq!(px[3][3], 255);
        assert_eq!(px[4], [255, 255, 255, 0]);
    }

    #[test]
    fn color_key_can_be_any_color() {
        let mut px = [[255, 0, 255, 255], [255, 255, 255, 255]];
        apply_color_key(&mut px, Rgb(255, 0, 255));
        assert_eq!(px[0][3], 0);
        assert_eq!(px[1][3], 255);
    }
}
