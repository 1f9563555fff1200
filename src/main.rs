//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! The loop is event driven: nothing changes between key presses, so it blocks
//! on the next terminal event instead of ticking.

mod config;

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_2048::core::{GameSnapshot, GameState, SeededRng};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::store::{BestScore, JsonFileStorage};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter(!config.no_mouse)?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        warn!(error = %e, "exited with error");
    }
    result
}

/// Logs go to a file only; the alternate screen owns stdout/stderr.
fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let storage_path = config.storage_path();
    let mut best = BestScore::load(JsonFileStorage::new(&storage_path));

    let rng = match config.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    let mut game = GameState::new(rng);
    game.initialize();
    game.set_best_score(best.get());

    info!(
        storage = %storage_path.display(),
        best = best.get(),
        seed = ?config.seed,
        "session started"
    );

    let view = GameView::new(config.cell_width, config.cell_height);
    let mut swipes = (!config.no_mouse).then(SwipeTracker::new);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    break;
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipes.as_mut().and_then(|s| s.handle_mouse(mouse)),
            Event::Resize(..) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };
        if !snap.accepts(action) {
            continue;
        }

        if game.apply_action(action) {
            if let Err(e) = best.record(game.score()) {
                warn!(error = %e, score = game.score(), "failed to persist best score");
            }
        }
    }

    info!(
        score = game.score(),
        best = game.best_score(),
        max_tile = game.grid().max_value(),
        episodes = game.episode_id() + 1,
        "session ended"
    );
    Ok(())
}
