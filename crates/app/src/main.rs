mod frame_input;
mod glyph_render;
mod window_config;

use std::error::Error;
use std::sync::OnceLock;

use anyhow::Context;
use cavern_app::app_loop::AppState;
use cavern_app::seed::{AppArgs, SeedChoice, generate_runtime_seed};
use cavern_app::session_file::{SessionRecorder, SessionSummary, default_journal_path};
use cavern_app::{format_seed, format_snapshot_hash};
use cavern_core::config_file::{ConfigSource, load_startup_config};
use cavern_core::{ContentPack, Game, GameConfig, GameError, TurnOutcome};
use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use frame_input::capture_frame_input;
use glyph_render::{GlyphStyle, draw_console};
use window_config::build_window_conf;

type StartupConfig = Result<(GameConfig, ConfigSource), GameError>;

static STARTUP_CONFIG: OnceLock<StartupConfig> = OnceLock::new();

fn startup_config() -> &'static StartupConfig {
    STARTUP_CONFIG.get_or_init(|| load_startup_config(None))
}

fn window_conf() -> Conf {
    match startup_config() {
        Ok((config, _)) => build_window_conf(config),
        Err(_) => build_window_conf(&GameConfig::default()),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn load_font(config: &GameConfig) -> Option<Font> {
    let path = config.font_path.as_deref()?;
    match load_ttf_font(path).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!(path, %err, "falling back to the built-in font");
            None
        }
    }
}

fn start_game(seed: u64, content: &ContentPack, config: &GameConfig) -> anyhow::Result<Game> {
    Game::new(seed, content, config)
        .with_context(|| format!("failed to start game with seed {}", format_seed(seed)))
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = AppArgs::parse();
    init_tracing(args.verbose);

    let (config, source) = match startup_config() {
        Ok((config, source)) => (config.clone(), source.clone()),
        Err(err) => {
            tracing::error!(error = err as &dyn Error, "failed to load config");
            return;
        }
    };
    tracing::info!(?source, "config loaded");

    let seed_choice = args.seed_choice(generate_runtime_seed());
    let seed = seed_choice.value();
    match seed_choice {
        SeedChoice::Cli(_) => tracing::info!(seed = %format_seed(seed), "using seed from --seed"),
        SeedChoice::Generated(_) => tracing::info!(seed = %format_seed(seed), "generated seed"),
    }

    let content = ContentPack::default();
    let mut game = match start_game(seed, &content, &config) {
        Ok(game) => game,
        Err(err) => {
            tracing::error!("{err:#}");
            return;
        }
    };

    let journal_path = default_journal_path();
    let mut recorder = SessionRecorder::start(
        journal_path.as_deref(),
        seed,
        content.content_hash(),
        config.config_hash(),
    );
    let style = GlyphStyle::new(config.cell_size, load_font(&config).await);
    let mut app = AppState::new();

    prevent_quit();
    loop {
        let input = capture_frame_input();
        let outcome = app.tick(&mut game, &input.keys_pressed, input.close_requested);
        for &key in &app.accepted_keys {
            recorder.record(key);
        }

        draw_console(game.console(), &style);
        if outcome == TurnOutcome::Quit {
            break;
        }
        next_frame().await;
    }

    let summary = recorder.summary(&game);
    tracing::info!(
        turns = summary.turns,
        keys = summary.keys,
        snapshot = %format_snapshot_hash(game.snapshot_hash()),
        "session ended"
    );
    if let Some(path) = SessionSummary::get_default_path()
        && let Err(err) = summary.write_atomic(&path)
    {
        tracing::warn!(path = %path.display(), %err, "failed to write session summary");
    }
}
