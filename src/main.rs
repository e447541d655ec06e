//! Terminal Snake runner.
//!
//! Drives the engine on a fixed 200 ms step cadence: poll for input with a
//! timeout bounded by the time remaining until the next step, apply actions
//! synchronously, then step. Everything runs on one thread.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::engine::GameEngine;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::score::FileScoreStore;
use tui_snake::term::{key_hints, overlay_lines, status_line, GameView, TerminalCanvas};
use tui_snake::types::{GamePhase, STEP_MS};

const LOG_FILE: &str = "tui-snake.log";

fn main() -> Result<()> {
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?,
    )?;
    info!("starting tui-snake");

    let seed = clock_seed();
    let mut engine = GameEngine::new(seed, FileScoreStore::default());

    let view = GameView::default();
    let mut term = TerminalCanvas::new(engine.state().tile_count(), view.palette().background);
    term.enter()?;

    let result = run(&mut engine, &view, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    engine: &mut GameEngine<FileScoreStore>,
    view: &GameView,
    term: &mut TerminalCanvas,
) -> Result<()> {
    let step_duration = Duration::from_millis(STEP_MS as u64);
    let mut last_step = Instant::now();

    loop {
        // Render.
        view.render(engine.state(), term)?;
        if let Some(notice) = engine.notice() {
            term.draw_overlay(&overlay_lines(notice))?;
        }
        term.present(
            &status_line(engine.phase(), engine.score(), engine.high_score()),
            key_hints(engine.phase()),
        )?;

        // Input with timeout until the next step.
        let timeout = step_duration
            .checked_sub(last_step.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action);
                    }
                }
            }
        }

        // Step. While not running, keep the stopwatch pinned so resuming
        // waits a full interval instead of catching up.
        if engine.phase() != GamePhase::Running {
            last_step = Instant::now();
            continue;
        }
        if last_step.elapsed() >= step_duration {
            last_step = Instant::now();
            engine.step();
        }
    }
}

/// Seed food placement from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
