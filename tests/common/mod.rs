// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::Cell;
use std::path::Path;

use isotile::{
    Command, Drawable, EngineConfig, ImageProvider, InputSource, PresentSink, Rect, Rgb, TileCatalog,
    TileDefinition, TileId, TileSource,
};

/// Stand-in for a decoded image; remembers which file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeImage(pub String);

impl Drawable for FakeImage {
    fn width(&self) -> u32 {
        130
    }
    fn height(&self) -> u32 {
        66
    }
}

pub struct FakeProvider;

impl ImageProvider for FakeProvider {
    type Image = FakeImage;

    fn load(&mut self, path: &Path, _key: Option<Rgb>) -> anyhow::Result<FakeImage> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("bad path"))?;
        Ok(FakeImage(name.to_owned()))
    }
}

pub fn demo_catalog(cfg: &EngineConfig) -> TileCatalog<FakeImage> {
    TileCatalog::load(&cfg.tileset, Path::new("data"), &mut FakeProvider).expect("demo tileset")
}

/// Tile source that counts lookups.
pub struct CountingTiles<'a, I> {
    pub inner: &'a TileCatalog<I>,
    pub lookups: Cell<usize>,
}

impl<'a, I> CountingTiles<'a, I> {
    pub fn new(inner: &'a TileCatalog<I>) -> Self {
        CountingTiles {
            inner,
            lookups: Cell::new(0),
        }
    }
}

impl<'a, I> TileSource for CountingTiles<'a, I> {
    type Image = I;

    fn tile_size(&self) -> (i32, i32) {
        self.inner.tile_size()
    }

    fn tile(&self, id: TileId) -> &TileDefinition<I> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.get(id)
    }
}

/// Hands out one scripted batch of commands per poll.
#[derive(Default)]
pub struct ScriptedInput {
    pub batches: Vec<Vec<Command>>,
}

impl ScriptedInput {
    pub fn new(batches: Vec<Vec<Command>>) -> Self {
        let mut batches = batches;
        batches.reverse();
        ScriptedInput { batches }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, out: &mut Vec<Command>) {
        if let Some(batch) = self.batches.pop() {
            out.extend(batch);
        }
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub presented: Vec<Vec<Rect>>,
}

impl PresentSink for RecordingSink {
    fn present(&mut self, regions: &[Rect]) {
        self.presented.push(regions.to_vec());
    }
}
