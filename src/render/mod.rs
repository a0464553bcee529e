//! Culling and compositing.

mod cull;
mod renderer;
mod target;

pub use cull::{tile_bounds, visible_cells, CellRange};
pub use renderer::{FrameStats, RenderOptions, Renderer, GRID_TILE};
pub use target::{DrawTarget, PresentSink};
