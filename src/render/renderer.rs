use serde::{Deserialize, Serialize};

use super::cull::{tile_bounds, visible_cells};
use super::target::DrawTarget;
use crate::geom::{Point, Rect, Rgb};
use crate::spatial::{grid_to_screen, TileId, WorldGrid};
use crate::tileset::TileSource;
use crate::view::{Camera, Viewport};

/// Tile whose image is used as the grid overlay.
pub const GRID_TILE: TileId = TileId(0);

/// Renderer flags and colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Color the viewport is cleared to before a pass
    pub background: Rgb,
    /// Draw the grid tile over every cell that shows a tile
    pub show_grid: bool,
    /// Label every cell that shows a tile with its `row , col`
    pub show_labels: bool,
    /// Font size of cell labels
    pub label_size: u16,
    /// Color of cell labels
    pub label_color: Rgb,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            background: Rgb(10, 10, 10),
            show_grid: true,
            show_labels: true,
            label_size: 12,
            label_color: Rgb(200, 200, 200),
        }
    }
}

/// Counters for the last pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Cells inside the clamped visible range
    pub cells_visited: usize,
    /// Tiles blitted (grid overlay not counted)
    pub tiles_drawn: usize,
    /// Tiles skipped because their box missed the viewport
    pub tiles_culled: usize,
}

/// Paints the visible part of the world into a draw target whenever the
/// camera moved.
pub struct Renderer<'a, S, T>
where
    S: TileSource,
    T: DrawTarget<Image = S::Image>,
{
    target: T,
    tiles: &'a S,
    grid: &'a WorldGrid,
    viewport: Viewport,
    options: RenderOptions,
    stats: FrameStats,
    labels: Vec<(String, Point)>,
}

impl<'a, S, T> Renderer<'a, S, T>
where
    S: TileSource,
    T: DrawTarget<Image = S::Image>,
{
    /// Creates a renderer drawing into `target`.
    pub fn new(target: T, tiles: &'a S, grid: &'a WorldGrid, viewport: Viewport, options: RenderOptions) -> Self {
        Renderer {
            target,
            tiles,
            grid,
            viewport,
            options,
            stats: FrameStats::default(),
            labels: Vec::new(),
        }
    }

    /// Runs one pass and returns the screen regions that changed.
    ///
    /// A clean camera costs nothing: no drawing, no tile lookups, no regions.
    /// Otherwise the viewport is cleared and repainted, the camera is marked
    /// clean and the viewport plus every label box is returned.
    pub fn render(&mut self, camera: &mut Camera) -> Vec<Rect> {
        self.stats = FrameStats::default();
        if !camera.is_dirty() {
            return Vec::new();
        }

        let tiles = self.tiles;
        let grid = self.grid;
        let opts = self.options;
        let view = self.viewport.rect();
        let (tw, th) = tiles.tile_size();

        self.target.set_clip(Some(view));
        self.target.fill(view, opts.background);
        let mut dirty = vec![view];

        let range = visible_cells(camera.rect(), tw, th, grid.rows(), grid.cols());
        let shift = self.viewport.translation(camera);
        self.labels.clear();

        for coord in range.iter() {
            self.stats.cells_visited += 1;
            let anchor = grid_to_screen(coord, tw, th).offset(shift.x, shift.y);
            let mut labelled = false;

            for id in grid.cell(coord).tiles() {
                let tile = tiles.tile(id);
                let at = anchor.offset(tile.offset.x, tile.offset.y);
                if !tile_bounds(at, tw, th).overlaps(&view) {
                    self.stats.tiles_culled += 1;
                    continue;
                }

                self.target.blit(&tile.image, at);
                self.stats.tiles_drawn += 1;

                if opts.show_grid {
                    let g = tiles.tile(GRID_TILE);
                    self.target.blit(&g.image, anchor.offset(g.offset.x, g.offset.y));
                }
                if opts.show_labels && !labelled {
                    self.labels.push((
                        format!("{} , {}", coord.row, coord.col),
                        Point::new(anchor.x, anchor.y + th / 2),
                    ));
                    labelled = true;
                }
            }
        }

        // labels go on top of every tile
        for (text, at) in self.labels.drain(..) {
            dirty.push(self.target.draw_label(&text, at, opts.label_size, opts.label_color));
        }

        self.target.set_clip(None);
        camera.clear_dirty();

        tracing::debug!(
            "render: camera {:?}, cells {}x{} ({} visited), {} drawn, {} culled, {} regions",
            camera.position(),
            range.rows.len(),
            range.cols.len(),
            self.stats.cells_visited,
            self.stats.tiles_drawn,
            self.stats.tiles_culled,
            dirty.len()
        );
        dirty
    }

    /// Counters from the last call to [`Renderer::render`].
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// The viewport this renderer paints.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Tile source the renderer reads from.
    pub fn tiles(&self) -> &'a S {
        self.tiles
    }

    /// The draw target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The draw target, for overlays drawn outside a pass.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Gives the draw target back.
    pub fn into_target(self) -> T {
        self.target
    }
}
