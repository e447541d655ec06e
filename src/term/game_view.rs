//! GameView: maps the game state onto a `Canvas`.
//!
//! This module is pure (no I/O). It can be unit-tested.

use anyhow::Result;

use crate::core::GameState;
use crate::engine::GameOverNotice;
use crate::term::canvas::{Canvas, Rgb};
use crate::types::GamePhase;

/// Colors for the arena, lifted from the classic green-on-light scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub head: Rgb,
    pub body: Rgb,
    pub food: Rgb,
    /// Inset square drawn inside the food cell.
    pub food_core: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(247, 250, 252),
            head: Rgb::new(47, 133, 90),
            body: Rgb::new(72, 187, 120),
            food: Rgb::new(229, 62, 62),
            food_core: Rgb::new(197, 48, 48),
        }
    }
}

/// Draws the full scene: wipe, body, head, food.
#[derive(Debug, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Redraw the whole arena for the current state.
    pub fn render(&self, state: &GameState, canvas: &mut impl Canvas) -> Result<()> {
        canvas.clear()?;

        for (i, &segment) in state.snake().iter().enumerate() {
            // A head that just left the arena is not drawable.
            if !segment.in_bounds(state.tile_count()) {
                continue;
            }
            let color = if i == 0 {
                self.palette.head
            } else {
                self.palette.body
            };
            canvas.fill_cell(segment, color, None)?;
        }

        canvas.fill_cell(state.food(), self.palette.food, Some(self.palette.food_core))?;
        Ok(())
    }
}

/// One-line score readout for the HUD.
pub fn status_line(phase: GamePhase, score: u32, high_score: u32) -> String {
    format!("score {score}   best {high_score}   [{}]", phase.as_str())
}

/// Key hints matching what the current phase accepts.
pub fn key_hints(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Idle => "enter: start  q: quit",
        GamePhase::Running => "arrows: steer  p: pause  r: restart  q: quit",
        GamePhase::Paused => "p: resume  r: restart  q: quit",
        GamePhase::Over => "r: restart  q: quit",
    }
}

/// Text for the dismissible end-of-game overlay.
pub fn overlay_lines(notice: &GameOverNotice) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    lines.push(if notice.won { "YOU WIN!" } else { "GAME OVER" }.to_string());
    lines.push(format!("final score {}", notice.final_score));
    if notice.new_high_score {
        lines.push("new high score!".to_string());
    }
    lines.push("press r to restart".to_string());
    lines
}
