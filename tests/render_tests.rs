// tests/render_tests.rs

mod common;

use common::{demo_catalog, CountingTiles, FakeImage};
use isotile::{
    CommandBuffer, DrawCommand, EngineConfig, Point, Rect, RenderOptions, Renderer, TileCatalog,
    TileDefinition, TileId, TileKind, Viewport, WorldGrid,
};

fn blits(buf: &CommandBuffer<FakeImage>) -> Vec<(String, Point)> {
    buf.commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Blit { image, at } => Some((image.0.clone(), *at)),
            _ => None,
        })
        .collect()
}

#[test]
fn clean_camera_costs_nothing() {
    let cfg = EngineConfig::default();
    let catalog = demo_catalog(&cfg);
    let tiles = CountingTiles::new(&catalog);
    let grid = cfg.build_grid();
    let vp = Viewport::new(cfg.viewport.0);
    let mut cam = vp.camera_at(0, 0);
    let mut r = Renderer::new(CommandBuffer::new(), &tiles, &grid, vp, cfg.render);

    let first = r.render(&mut cam);
    assert!(!first.is_empty());
    assert!(tiles.lookups.get() > 0);

    let lookups = tiles.lookups.get();
    let recorded = r.target().commands().len();

    let second = r.render(&mut cam);
    assert!(second.is_empty());
    assert_eq!(tiles.lookups.get(), lookups);
    assert_eq!(r.target().commands().len(), recorded);
    assert_eq!(r.stats().cells_visited, 0);
}

#[test]
fn tile_outside_viewport_is_never_blitted() {
    let far = |id: u32, offset: Point| TileDefinition {
        id: TileId(id),
        image: FakeImage(format!("{}.png", id)),
        offset,
        kind: TileKind::Floor,
    };
    let catalog = TileCatalog::new(
        130,
        66,
        vec![
            far(0, Point::new(-65, 0)),
            far(1, Point::new(-65, 0)),
            far(9, Point::new(-1200, -1200)),
        ],
    )
    .unwrap();
    let grid = WorldGrid::filled(1, 1, &[vec![TileId(1)], vec![TileId(9)]]);
    let vp = Viewport::new(Rect::new(200, 200, 800, 500));
    // anchor of (0, 0) lands on the viewport origin, so tile 9 sits at (-1000, -1000)
    let mut cam = vp.camera_at(0, 0);
    let mut r = Renderer::new(CommandBuffer::new(), &catalog, &grid, vp, RenderOptions::default());

    r.render(&mut cam);

    let drawn = blits(r.target());
    assert!(drawn.iter().all(|(name, _)| name != "9.png"));
    assert!(drawn.contains(&("1.png".to_owned(), Point::new(135, 200))));
    assert_eq!(r.stats().tiles_culled, 1);
    assert_eq!(r.stats().tiles_drawn, 1);
}

#[test]
fn every_blit_overlaps_the_viewport_and_edge_tiles_survive() {
    let cfg = EngineConfig::default();
    let catalog = demo_catalog(&cfg);
    let grid = cfg.build_grid();
    let vp = Viewport::new(cfg.viewport.0);
    let view = vp.rect();
    let mut cam = vp.camera_at(0, 0);
    let opts = RenderOptions {
        show_grid: false,
        ..cfg.render
    };
    let mut r = Renderer::new(CommandBuffer::new(), &catalog, &grid, vp, opts);

    r.render(&mut cam);
    let drawn = blits(r.target());

    assert!(!drawn.is_empty());
    assert!(drawn
        .iter()
        .all(|(_, at)| Rect::new(at.x, at.y, 130, 66).overlaps(&view)));
    // (0, 0) straddles the left edge
    assert!(drawn.iter().any(|(_, at)| at.x < view.left()));
    assert_eq!(r.stats().cells_visited, 8 * 14);
}

#[test]
fn off_grid_camera_paints_only_background() {
    let cfg = EngineConfig::default();
    let catalog = demo_catalog(&cfg);
    let grid = cfg.build_grid();
    let vp = Viewport::new(cfg.viewport.0);
    let mut cam = vp.camera_at(-5000, -5000);
    let mut r = Renderer::new(CommandBuffer::new(), &catalog, &grid, vp, cfg.render);

    let regions = r.render(&mut cam);

    assert_eq!(regions, vec![vp.rect()]);
    assert_eq!(r.stats().cells_visited, 0);
    assert_eq!(r.target().blit_count(), 0);
    assert!(!cam.is_dirty());
}

#[test]
fn camera_at_the_edge_of_the_axis_paints_only_background() {
    let cfg = EngineConfig::default();
    let catalog = demo_catalog(&cfg);
    let grid = cfg.build_grid();
    let vp = Viewport::new(cfg.viewport.0);
    let mut r = Renderer::new(CommandBuffer::new(), &catalog, &grid, vp, cfg.render);

    for (x, y) in [
        (i32::MAX - 100, 0),
        (0, i32::MAX - 10),
        (i32::MIN, i32::MIN),
        (i32::MAX, i32::MAX),
    ] {
        let mut cam = vp.camera_at(0, 0);
        cam.move_to(x, y);
        cam.move_by(10, 10);

        let regions = r.render(&mut cam);

        assert_eq!(regions, vec![vp.rect()], "camera at ({}, {})", x, y);
        assert_eq!(r.stats().cells_visited, 0);
        assert!(!cam.is_dirty());
    }
    assert_eq!(r.target().blit_count(), 0);
}

#[test]
fn walls_paint_above_floor_in_layer_order() {
    let cfg = EngineConfig::default();
    let catalog = demo_catalog(&cfg);
    let grid = cfg.build_grid();
    let vp = Viewport::new(Rect::new(0, 0, 800, 500));
    // put cell (11, 11) near the middle of the viewport
    let mut cam = vp.camera_at(-400, 500);
    let opts = RenderOptions {
        show_grid: false,
        show_labels: false,
        ..cfg.render
    };
    let mut r = Renderer::new(CommandBuffer::new(), &catalog, &grid, vp, opts);

    r.render(&mut cam);
    let drawn = blits(r.target());

    // anchor of (11, 11): (0, 726) shifted by (400, -500)
    let anchor = Point::new(400, 226);
    let at_cell: Vec<_> = drawn
        .iter()
        .filter(|(name, at)| {
            (name == "1.png" && *at == anchor.offset(-65, 0))
                || (name == "2.png" && *at == anchor.offset(-66, -66))
                || (name == "3.png" && *at == anchor.offset(0, -66))
        })
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(at_cell, vec!["1.png", "2.png", "3.png"]);
}
