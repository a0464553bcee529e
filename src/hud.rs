//! Developer overlay: frame rate, camera position and the cell under the
//! cursor, drawn outside the viewport.

use crate::config::HudConfig;
use crate::geom::{Point, Rect, Rgb};
use crate::render::DrawTarget;
use crate::spatial::screen_to_grid;
use crate::view::{Camera, Viewport};

/// Text lines for the overlay.
pub fn hud_lines(fps: f32, camera: &Camera, viewport: &Viewport, cursor: Point, tile_w: i32, tile_h: i32) -> Vec<String> {
    let view = camera.position();
    let world = viewport.screen_to_world(camera, cursor);
    let cell = screen_to_grid(world, tile_w, tile_h);
    vec![
        format!("FPS: {:.2}", fps),
        format!("VIEW: {} , {}", view.x, view.y),
        format!("CUR (screen): {}, {}", cursor.x, cursor.y),
        format!("CUR (view): {}, {}", world.x, world.y),
        format!("CUR (map): {}, {}", cell.row, cell.col),
    ]
}

/// Redraws the overlay every frame, erasing the previous one first.
#[derive(Debug)]
pub struct Hud {
    config: HudConfig,
    background: Rgb,
    last: Vec<Rect>,
}

impl Hud {
    /// `background` is the window color used to erase old text.
    pub fn new(config: HudConfig, background: Rgb) -> Self {
        Hud {
            config,
            background,
            last: Vec::new(),
        }
    }

    /// Outlines the viewport one pixel outside its edge.
    pub fn draw_frame<T: DrawTarget>(&self, target: &mut T, viewport: &Viewport) -> Rect {
        let frame = viewport.rect().inflate(2, 2);
        target.outline(frame, self.config.frame_color);
        frame
    }

    /// Erases the previous lines, draws `lines`, and returns both the erased
    /// and the new boxes.
    pub fn draw<T: DrawTarget>(&mut self, target: &mut T, lines: &[String]) -> Vec<Rect> {
        if !self.config.enabled {
            return Vec::new();
        }

        let mut dirty = Vec::with_capacity(self.last.len() + lines.len());
        for r in self.last.drain(..) {
            target.fill(r, self.background);
            dirty.push(r);
        }
        for (n, line) in lines.iter().enumerate() {
            let at = Point::new(10, 10 * (n as i32 + 1));
            let r = target.draw_label(line, at, self.config.text_size, self.config.text_color);
            self.last.push(r);
            dirty.push(r);
        }
        dirty
    }
}
