//! Terminal debris runner (default binary).
//!
//! Loads config and frames, sizes the playfield from the terminal and then
//! drives the engine at a fixed tick until the player quits.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use tui_debris::core::GameConfig;
use tui_debris::engine::{Game, Playfield, Sprites};
use tui_debris::input::KeyboardControls;
use tui_debris::term::{FrameCanvas, SpriteSheet, TerminalRenderer};

const DEFAULT_CONFIG: &str = "tui-debris.toml";
const DEFAULT_LOG: &str = "tui-debris.log";

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;
    let (sheet, sprites) = load_sprites(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, sheet, sprites);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}

/// Log to a file, and only when `RUST_LOG` asks for it; stderr would draw
/// over the alternate screen.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = std::env::var("TUI_DEBRIS_LOG").unwrap_or_else(|_| DEFAULT_LOG.to_string());
    let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    let mut config = match std::env::var_os("TUI_DEBRIS_CONFIG").map(PathBuf::from) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG).exists() => GameConfig::load(Path::new(DEFAULT_CONFIG))
            .with_context(|| format!("failed to load config {DEFAULT_CONFIG}"))?,
        None => GameConfig::default(),
    };
    config
        .apply_env_overrides(|key| std::env::var(key).ok())
        .context("bad environment override")?;
    if config.seed.is_none() {
        config.seed = Some(rand::random());
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn load_sprites(config: &GameConfig) -> Result<(SpriteSheet, Sprites)> {
    match &config.assets_dir {
        Some(dir) => SpriteSheet::load_dir(dir)
            .with_context(|| format!("failed to load frames from {}", dir.display())),
        None => SpriteSheet::builtin().context("built-in frames are malformed"),
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: GameConfig,
    sheet: SpriteSheet,
    sprites: Sprites,
) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let playfield = Playfield::new(
        config.playfield.rows.unwrap_or(rows),
        config.playfield.cols.unwrap_or(cols),
        config.playfield.border,
    );
    let tick = Duration::from_secs_f64(config.timing.tick_secs);

    let mut canvas = FrameCanvas::new(playfield.rows, playfield.cols, playfield.border, sheet);
    let mut game = Game::new(config, playfield, sprites)?;
    game.populate();

    let mut keys = KeyboardControls::new();
    let mut banner_shown = false;

    loop {
        let started = Instant::now();

        keys.pump()?;
        if keys.quit_requested() {
            return Ok(());
        }

        game.tick(&mut canvas, &mut keys)?;

        // Debris erases whatever it overlapped, border included.
        canvas.framebuffer_mut().draw_border(playfield.border);
        if game.is_over() {
            if !banner_shown {
                log::info!("game over in year {}", game.world().year());
                banner_shown = true;
            }
            canvas.draw_centered(game.world().sprites.game_over)?;
        }
        term.draw(canvas.framebuffer())?;

        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
