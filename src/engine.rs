//! Game engine - session orchestration on top of the pure core.
//!
//! The engine owns a `GameState` and an injected `HighScoreStore`. It maps
//! player actions onto state transitions, runs the high-score comparison at
//! game over, and keeps the end-of-game notice around for the presentation
//! layer until the next restart clears it.

use log::{error, info, warn};

use crate::core::{GameState, StepOutcome};
use crate::score::HighScoreStore;
use crate::types::{GameAction, GamePhase};

/// End-of-game summary for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverNotice {
    pub final_score: u32,
    pub new_high_score: bool,
    pub won: bool,
}

pub struct GameEngine<S: HighScoreStore> {
    state: GameState,
    store: S,
    high_score: u32,
    notice: Option<GameOverNotice>,
}

impl<S: HighScoreStore> GameEngine<S> {
    /// Create an engine with a fresh game and the persisted high score.
    ///
    /// A store that fails to load is treated as empty; the error is logged
    /// and the high score starts at 0.
    pub fn new(seed: u32, store: S) -> Self {
        let high_score = match store.load() {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to load high score, starting from 0: {err:#}");
                0
            }
        };

        Self {
            state: GameState::new(seed),
            store,
            high_score,
            notice: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// The pending end-of-game notice, if a game has ended since the last
    /// restart.
    pub fn notice(&self) -> Option<&GameOverNotice> {
        self.notice.as_ref()
    }

    /// Apply a player action. Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.state.set_direction(dir),
            GameAction::Start => {
                let was_idle = self.state.phase() == GamePhase::Idle;
                self.state.start();
                was_idle
            }
            GameAction::TogglePause => {
                let before = self.state.phase();
                self.state.toggle_pause();
                self.state.phase() != before
            }
            GameAction::Restart => {
                self.state.restart();
                self.notice = None;
                true
            }
        }
    }

    /// Advance the simulation by one step (no-op unless running).
    pub fn step(&mut self) -> Option<StepOutcome> {
        let outcome = self.state.step()?;
        match outcome {
            StepOutcome::Died => self.finish_game(false),
            StepOutcome::Won => self.finish_game(true),
            StepOutcome::Advanced | StepOutcome::Ate => {}
        }
        Some(outcome)
    }

    fn finish_game(&mut self, won: bool) {
        let final_score = self.state.score();
        let new_high_score = final_score > self.high_score;

        if new_high_score {
            self.high_score = final_score;
            // Persistence is best effort; a failing store must not take the
            // game down with it.
            if let Err(err) = self.store.save(final_score) {
                error!("failed to persist high score {final_score}: {err:#}");
            }
        }

        info!(
            "game over: score={final_score} high_score={} won={won}",
            self.high_score
        );
        self.notice = Some(GameOverNotice {
            final_score,
            new_high_score,
            won,
        });
    }
}
