//! Grid storage and the isometric projection between grid cells and pixels.

mod grid;
mod projection;

pub use grid::{Cell, CellCoord, TileId, WorldGrid};
pub use projection::{grid_to_screen, screen_to_grid, SEAM_PAD};
