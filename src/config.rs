//! Startup configuration, read from JSON.
//!
//! Every section has defaults reproducing the map explorer demo, so a config
//! file only needs the keys it changes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::geom::{Point, Rect, Rgb};
use crate::render::RenderOptions;
use crate::spatial::{CellCoord, TileId, WorldGrid};
use crate::tileset::TileKind;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window and frame loop
    pub window: WindowConfig,
    /// Screen rectangle the map is shown in
    pub viewport: ViewportConfig,
    /// Starting position and pan speed
    pub camera: CameraConfig,
    /// Renderer flags and colors
    pub render: RenderOptions,
    /// Developer overlay
    pub hud: HudConfig,
    /// Tile images and geometry
    pub tileset: TilesetConfig,
    /// Map extent and contents
    pub world: WorldConfig,
}

/// Window and frame loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window caption
    pub title: String,
    /// Window width in pixels
    pub width: i32,
    /// Window height in pixels
    pub height: i32,
    /// Frames per second the loop is throttled to
    pub frame_rate: u32,
    /// Directory tile images are loaded from
    pub asset_dir: PathBuf,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "IsoTile Demo".to_owned(),
            width: 1024,
            height: 768,
            frame_rate: 120,
            asset_dir: PathBuf::from("data"),
        }
    }
}

/// Viewport rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewportConfig(pub Rect);

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig(Rect::new(200, 200, 800, 500))
    }
}

/// Camera start and speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial top-left corner in world pixels
    pub start: Point,
    /// Pixels moved per directional step
    pub velocity: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            start: Point::new(0, 0),
            velocity: 10,
        }
    }
}

/// Developer overlay drawn by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Draw the FPS / view / cursor lines
    pub enabled: bool,
    /// Font size of the overlay lines
    pub text_size: u16,
    /// Color of the overlay lines
    pub text_color: Rgb,
    /// Outline drawn around the viewport at startup
    pub frame_color: Rgb,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            enabled: true,
            text_size: 16,
            text_color: Rgb(200, 200, 200),
            frame_color: Rgb(255, 255, 255),
        }
    }
}

/// One tile entry of the tileset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Catalog id
    pub id: TileId,
    /// Image path relative to the asset directory
    pub image: String,
    /// Offset from the cell anchor to the image's top-left corner
    #[serde(default)]
    pub offset: Point,
    /// Informational kind
    #[serde(default)]
    pub kind: TileKind,
}

/// Tile geometry and images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilesetConfig {
    /// Tile width in pixels, shared by every tile
    pub tile_width: i32,
    /// Tile height in pixels, shared by every tile
    pub tile_height: i32,
    /// Color made transparent when images are loaded
    pub color_key: Option<Rgb>,
    /// Tile entries
    pub tiles: Vec<TileConfig>,
}

impl Default for TilesetConfig {
    fn default() -> Self {
        let width = 130;
        let floor = |id: u32| TileConfig {
            id: TileId(id),
            image: format!("{}.png", id),
            offset: Point::new(-width / 2, 0),
            kind: TileKind::Floor,
        };
        let wall = |id: u32, offset: Point| TileConfig {
            id: TileId(id),
            image: format!("{}.png", id),
            offset,
            kind: TileKind::Wall,
        };

        TilesetConfig {
            tile_width: width,
            tile_height: 66,
            color_key: Some(Rgb(255, 255, 255)),
            tiles: vec![
                floor(0),
                floor(1),
                wall(2, Point::new(-66, -66)),
                wall(3, Point::new(0, -66)),
            ],
        }
    }
}

/// Replaces one layer of one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellOverride {
    /// Row index
    pub row: i32,
    /// Column index
    pub col: i32,
    /// Layer index within the cell
    pub layer: usize,
    /// Tiles painted in order
    pub tiles: Vec<TileId>,
}

/// Map extent and contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Row count
    pub rows: i32,
    /// Column count
    pub cols: i32,
    /// Layer stack every cell starts with
    pub default_layers: Vec<Vec<TileId>>,
    /// Per-cell replacements applied after filling
    pub overrides: Vec<CellOverride>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        let wall = |row, col, tiles: &[u32]| CellOverride {
            row,
            col,
            layer: 1,
            tiles: tiles.iter().copied().map(TileId).collect(),
        };

        WorldConfig {
            rows: 20,
            cols: 20,
            default_layers: vec![vec![TileId(1)], vec![], vec![]],
            overrides: vec![
                wall(9, 9, &[2]),
                wall(10, 9, &[2]),
                wall(7, 7, &[3]),
                wall(7, 8, &[3]),
                wall(11, 11, &[2, 3]),
                wall(11, 9, &[2]),
                wall(10, 12, &[2]),
                wall(12, 9, &[3]),
                wall(12, 10, &[3]),
            ],
        }
    }
}

impl EngineConfig {
    /// Reads and validates a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let p = path.as_ref();
        if p.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(EngineError::UnsupportedFormat(p.to_path_buf()));
        }

        let txt = std::fs::read_to_string(p).map_err(|source| EngineError::Io {
            path: p.to_path_buf(),
            source,
        })?;
        let cfg: EngineConfig = serde_json::from_str(&txt).map_err(|source| EngineError::Json {
            path: p.to_path_buf(),
            source,
        })?;

        cfg.validate()?;
        tracing::info!("Loaded config {}", p.display());
        Ok(cfg)
    }

    /// Checks every invariant the engine relies on at runtime.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: String| Err(EngineError::InvalidConfig(msg));

        if self.window.width <= 0 || self.window.height <= 0 {
            return invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.frame_rate == 0 {
            return invalid("frame_rate must be at least 1".to_owned());
        }

        let vp = self.viewport.0;
        if vp.w <= 0 || vp.h <= 0 {
            return invalid(format!("viewport size must be positive, got {}x{}", vp.w, vp.h));
        }

        let ts = &self.tileset;
        if ts.tile_width <= 0 || ts.tile_height <= 0 {
            return invalid(format!(
                "tile size must be positive, got {}x{}",
                ts.tile_width, ts.tile_height
            ));
        }

        let mut known = HashSet::with_capacity(ts.tiles.len());
        for t in &ts.tiles {
            if !known.insert(t.id) {
                return Err(EngineError::DuplicateTile(t.id));
            }
        }
        if self.render.show_grid && !known.contains(&TileId(0)) {
            return invalid("show_grid needs tile 0 as the grid image".to_owned());
        }

        let w = &self.world;
        if w.rows <= 0 || w.cols <= 0 {
            return invalid(format!(
                "world extent must be positive, got {}x{}",
                w.rows, w.cols
            ));
        }
        if let Some(id) = w.default_layers.iter().flatten().find(|id| !known.contains(*id)) {
            return invalid(format!("default layers reference unknown tile {}", id.0));
        }
        for o in &w.overrides {
            let cell = CellCoord::new(o.row, o.col);
            if !(0..w.rows).contains(&o.row) || !(0..w.cols).contains(&o.col) {
                return invalid(format!(
                    "override cell ({}, {}) is outside the {}x{} world",
                    o.row, o.col, w.rows, w.cols
                ));
            }
            if let Some(&id) = o.tiles.iter().find(|id| !known.contains(*id)) {
                return Err(EngineError::UnknownTile { cell, id });
            }
        }

        Ok(())
    }

    /// Builds the world grid. Call after [`EngineConfig::validate`].
    pub fn build_grid(&self) -> WorldGrid {
        let w = &self.world;
        let mut grid = WorldGrid::filled(w.rows, w.cols, &w.default_layers);
        for o in &w.overrides {
            grid.set_layer(CellCoord::new(o.row, o.col), o.layer, o.tiles.clone());
        }
        grid
    }
}
