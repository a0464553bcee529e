use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::TilesetConfig;
use crate::error::EngineError;
use crate::geom::{Point, Rgb};
use crate::spatial::TileId;

/// What a tile represents. Informational only; rendering ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Ground tile
    #[default]
    Floor,
    /// Raised tile drawn above its anchor
    Wall,
}

/// A drawable image with known pixel bounds.
pub trait Drawable {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
}

/// Loads tile images by path.
///
/// Failures are fatal: the catalog turns them into
/// [`EngineError::MissingAsset`] and startup stops.
pub trait ImageProvider {
    /// Image type handed to the draw target.
    type Image: Drawable;

    /// Loads and decodes one image, applying `color_key` as transparency.
    fn load(&mut self, path: &Path, color_key: Option<Rgb>) -> anyhow::Result<Self::Image>;
}

/// One tile: image plus the offset applied to a cell anchor when blitting.
#[derive(Debug, Clone)]
pub struct TileDefinition<I> {
    /// Catalog key
    pub id: TileId,
    /// Image handle
    pub image: I,
    /// Pixel offset from the cell anchor to the image's top-left corner
    pub offset: Point,
    /// Informational kind
    pub kind: TileKind,
}

/// Read-only tile lookup used by the renderer.
pub trait TileSource {
    /// Image type of the definitions.
    type Image;

    /// Uniform tile width and height in pixels.
    fn tile_size(&self) -> (i32, i32);

    /// Definition for `id`. Panics for ids the source does not define.
    fn tile(&self, id: TileId) -> &TileDefinition<Self::Image>;
}

/// Immutable registry of tile definitions sharing one tile size.
#[derive(Debug)]
pub struct TileCatalog<I> {
    tile_w: i32,
    tile_h: i32,
    tiles: HashMap<TileId, TileDefinition<I>>,
}

impl<I> TileCatalog<I> {
    /// Builds a catalog from already loaded definitions.
    pub fn new(tile_w: i32, tile_h: i32, defs: Vec<TileDefinition<I>>) -> Result<Self, EngineError> {
        if tile_w <= 0 || tile_h <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "tile size must be positive, got {}x{}",
                tile_w, tile_h
            )));
        }

        let mut tiles = HashMap::with_capacity(defs.len());
        for def in defs {
            let id = def.id;
            if tiles.insert(id, def).is_some() {
                return Err(EngineError::DuplicateTile(id));
            }
        }

        Ok(Self { tile_w, tile_h, tiles })
    }

    /// Loads every image named by `cfg` from `asset_dir`.
    pub fn load<P>(cfg: &TilesetConfig, asset_dir: &Path, provider: &mut P) -> Result<Self, EngineError>
    where
        I: Drawable,
        P: ImageProvider<Image = I>,
    {
        let mut defs = Vec::with_capacity(cfg.tiles.len());
        for t in &cfg.tiles {
            let path = asset_dir.join(&t.image);
            let image = provider
                .load(&path, cfg.color_key)
                .map_err(|e| EngineError::MissingAsset {
                    id: t.id,
                    path: path.clone(),
                    reason: format!("{:#}", e),
                })?;

            if image.width() != cfg.tile_width as u32 || image.height() != cfg.tile_height as u32 {
                tracing::warn!(
                    "tile {} image {} is {}x{}, catalog tile size is {}x{}",
                    t.id.0,
                    path.display(),
                    image.width(),
                    image.height(),
                    cfg.tile_width,
                    cfg.tile_height
                );
            }

            defs.push(TileDefinition {
                id: t.id,
                image,
                offset: t.offset,
                kind: t.kind,
            });
        }

        let catalog = Self::new(cfg.tile_width, cfg.tile_height, defs)?;
        tracing::info!(
            "Loaded {} tiles ({}x{}) from {}",
            catalog.len(),
            catalog.tile_w,
            catalog.tile_h,
            asset_dir.display()
        );
        Ok(catalog)
    }

    /// Tile width in pixels.
    #[inline]
    pub fn tile_width(&self) -> i32 {
        self.tile_w
    }

    /// Tile height in pixels.
    #[inline]
    pub fn tile_height(&self) -> i32 {
        self.tile_h
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True when `id` is defined.
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Definition for `id`, if any.
    pub fn try_get(&self, id: TileId) -> Option<&TileDefinition<I>> {
        self.tiles.get(&id)
    }

    /// Definition for `id`. Panics for unknown ids.
    #[inline]
    pub fn get(&self, id: TileId) -> &TileDefinition<I> {
        match self.tiles.get(&id) {
            Some(def) => def,
            None => panic!("tile {} is not defined in the catalog", id.0),
        }
    }
}

impl<I> TileSource for TileCatalog<I> {
    type Image = I;

    #[inline]
    fn tile_size(&self) -> (i32, i32) {
        (self.tile_w, self.tile_h)
    }

    #[inline]
    fn tile(&self, id: TileId) -> &TileDefinition<I> {
        self.get(id)
    }
}
