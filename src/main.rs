//! Terminal runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and a framebuffer-based renderer.
//! The session only changes through intents and the fixed-timestep tick;
//! commentary replies are polled once per frame.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::coach::{Coach, CoachTrigger, CommentaryBackend};
use blockfall::core::{FieldConfig, GameSnapshot, GameState};
use blockfall::input::{
    handle_config_key, handle_key_event, handle_mouse_event, should_quit, FieldSettings,
};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{ConfigChange, TICK_MS};
use blockfall::GameConfig;

/// Falling-block puzzle in the terminal, with an optional commentary coach
#[derive(Parser, Debug)]
#[command(name = "blockfall")]
#[command(about = "Falling-block puzzle in the terminal")]
struct Args {
    /// TOML config file with [field] and [coach] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field width in columns (6-20)
    #[arg(long)]
    width: Option<u8>,

    /// Field height in rows (10-30)
    #[arg(long)]
    height: Option<u8>,

    /// Base gravity interval in ms (100-1000)
    #[arg(long)]
    speed: Option<u32>,

    /// Write logs here (filter from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable the commentary coach
    #[arg(long)]
    no_coach: bool,

    /// Random seed for a reproducible piece sequence
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = GameConfig::resolve(args.config.as_deref())?;
    let field = apply_cli_overrides(config.field, &args)?;
    info!(
        width = field.width,
        height = field.height,
        base_speed_ms = field.base_speed_ms,
        "starting blockfall"
    );

    let coach = if config.coach.enabled && !args.no_coach {
        Some(Coach::new(
            config.coach.backend(),
            config.coach.timeout(),
            config.coach.fallback.clone(),
        )?)
    } else {
        info!("commentary disabled");
        None
    };

    let game = match args.seed {
        Some(seed) => GameState::with_seed(field, seed),
        None => GameState::new(field),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, coach);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    // The terminal is in raw mode while playing, so logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn apply_cli_overrides(mut field: FieldConfig, args: &Args) -> Result<FieldConfig> {
    if let Some(width) = args.width {
        field = field.with_change(ConfigChange::Width(width))?;
    }
    if let Some(height) = args.height {
        field = field.with_change(ConfigChange::Height(height))?;
    }
    if let Some(speed) = args.speed {
        field = field.with_change(ConfigChange::BaseSpeedMs(speed))?;
    }
    Ok(field)
}

fn settings(field: FieldConfig) -> FieldSettings {
    FieldSettings {
        width: field.width,
        height: field.height,
        base_speed_ms: field.base_speed_ms,
    }
}

fn run(
    term: &mut TerminalRenderer,
    mut game: GameState,
    mut coach: Option<Coach<CommentaryBackend>>,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut trigger = CoachTrigger::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        game.snapshot_into(&mut snap);

        if let Some(coach) = coach.as_mut() {
            if let Some(request) = trigger.observe(&snap) {
                coach.request(request);
            }
            coach.poll();
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let line = coach.as_ref().and_then(|c| c.latest());
        view.render_into_with_coach(&snap, line, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }

                    if let Some(intent) = handle_key_event(key) {
                        game.apply_intent(intent);
                    } else if let Some(change) = handle_config_key(key, settings(game.config())) {
                        match game.reconfigure(change) {
                            Ok(true) => {}
                            Ok(false) => {
                                debug!(?change, "configuration locked while a session runs")
                            }
                            Err(err) => debug!(%err, "configuration change rejected"),
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(intent) = handle_mouse_event(mouse) {
                        game.apply_intent(intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        if let Some(event) = game.take_last_event() {
            debug!(
                lines_cleared = event.lines_cleared,
                score_delta = event.score_delta,
                level = event.level,
                level_up = event.level_up,
                game_over = event.game_over,
                "lock"
            );
        }
    }
}
