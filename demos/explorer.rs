use std::sync::OnceLock;

use anyhow::Context;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use isotile::backend::{cursor, CanvasTarget, KeyboardInput, TextureProvider};
use isotile::{
    hud_lines, DrawTarget, EngineConfig, FrameOutcome, Hud, Renderer, Rgb, Session, TileCatalog, Throttle,
    Viewport, WindowConfig,
};

/// Optional first argument: path to a JSON config.
fn load_config() -> anyhow::Result<EngineConfig> {
    match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(&path).with_context(|| format!("Loading config {}", path)),
        None => {
            let cfg = EngineConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}

/// The config, parsed once. The window settings are needed before `main` runs.
fn config() -> &'static Result<EngineConfig, String> {
    static CONFIG: OnceLock<Result<EngineConfig, String>> = OnceLock::new();
    CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)))
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

// macroquad calls this before `main`, so logging starts here
fn window_conf() -> Conf {
    init_logging();
    // a bad config is reported by `run` once the window is up
    let window = match config() {
        Ok(cfg) => cfg.window.clone(),
        Err(_) => WindowConfig::default(),
    };
    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = config().clone().map_err(anyhow::Error::msg)?;
    prevent_quit();

    let catalog = TileCatalog::load(&cfg.tileset, &cfg.window.asset_dir, &mut TextureProvider)
        .context("Loading tile images")?;
    let grid = cfg.build_grid();
    let viewport = Viewport::new(cfg.viewport.0);
    let camera = viewport.camera_at(cfg.camera.start.x, cfg.camera.start.y);
    let (tw, th) = (catalog.tile_width(), catalog.tile_height());

    let mut canvas = CanvasTarget::new(cfg.window.width as u32, cfg.window.height as u32);
    let mut presenter = canvas.presenter();
    let mut hud = Hud::new(cfg.hud, Rgb(0, 0, 0));
    canvas.fill(isotile::Rect::new(0, 0, cfg.window.width, cfg.window.height), Rgb(0, 0, 0));
    hud.draw_frame(&mut canvas, &viewport);

    let renderer = Renderer::new(canvas, &catalog, &grid, viewport, cfg.render);
    let mut session = Session::new(camera, renderer, cfg.camera.velocity);
    let mut input = KeyboardInput::default();
    let mut throttle = Throttle::new(cfg.window.frame_rate);

    tracing::info!(
        "Exploring {}x{} map, viewport {:?}",
        grid.rows(),
        grid.cols(),
        viewport.rect()
    );

    loop {
        let outcome = session.frame_with(&mut input, &mut presenter, |target, camera| {
            let lines = hud_lines(get_fps() as f32, camera, &viewport, cursor(), tw, th);
            hud.draw(target, &lines)
        });
        if outcome == FrameOutcome::Quit {
            break;
        }
        presenter.show();

        next_frame().await;
        throttle.wait();
    }

    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
