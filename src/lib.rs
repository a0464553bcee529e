#![warn(missing_docs)]

//! Isometric tile engine for Macroquad: diamond projection, viewport
//! culling and repaint-on-move.

pub mod backend;
mod command;
mod config;
mod error;
mod geom;
mod hud;
mod input;
mod render;
mod session;
mod spatial;
mod tileset;
mod view;

pub use command::{CommandBuffer, DrawCommand};
pub use config::{
    CameraConfig, CellOverride, EngineConfig, HudConfig, TileConfig, TilesetConfig, ViewportConfig,
    WindowConfig, WorldConfig,
};
pub use error::EngineError;
pub use geom::{Point, Rect, Rgb};
pub use hud::{hud_lines, Hud};
pub use input::{
    Command, Direction, InputSource, KeyRepeat, MAX_REPEAT_BURST, MIN_REPEAT_INTERVAL,
};
pub use render::{
    tile_bounds, visible_cells, CellRange, DrawTarget, FrameStats, PresentSink, RenderOptions, Renderer,
    GRID_TILE,
};
pub use session::{FrameOutcome, Session, Throttle};
pub use spatial::{grid_to_screen, screen_to_grid, Cell, CellCoord, TileId, WorldGrid, SEAM_PAD};
pub use tileset::{Drawable, ImageProvider, TileCatalog, TileDefinition, TileKind, TileSource};
pub use view::{Camera, Viewport};
