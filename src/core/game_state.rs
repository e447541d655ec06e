//! Game state module - manages the complete game state
//!
//! This module holds the snake, the food, the heading, the score, and the
//! lifecycle phase, and advances them one discrete step at a time. It is pure:
//! no timers, no I/O, no rendering. The runner drives `step()` on a fixed
//! cadence and the view reads the accessors.

use std::collections::VecDeque;

use crate::core::rng::SimpleRng;
use crate::types::*;

/// Result of advancing the simulation by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved one cell (pure translation).
    Advanced,
    /// The snake reached the food and grew by one segment.
    Ate,
    /// The snake hit a wall or itself; the game is over.
    Died,
    /// The snake filled the whole grid; the game is over and won.
    Won,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    tile_count: i8,
    /// Occupied cells, head first. Length >= 1 at all times.
    snake: VecDeque<Point>,
    food: Point,
    /// Direction of travel, read at step time. `None` until the game starts.
    heading: Option<Direction>,
    score: u32,
    phase: GamePhase,
    won: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game on the default grid with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_tile_count(TILE_COUNT, seed)
    }

    /// Create a new game on a `tile_count` x `tile_count` grid.
    pub fn with_tile_count(tile_count: i8, seed: u32) -> Self {
        debug_assert!(tile_count >= 2, "grid must have room for snake and food");

        let mut state = Self {
            tile_count,
            snake: VecDeque::from([Self::spawn(tile_count)]),
            food: Self::spawn(tile_count),
            heading: None,
            score: 0,
            phase: GamePhase::Idle,
            won: false,
            rng: SimpleRng::new(seed),
        };
        // The placeholder food sits on the snake; replace it before play.
        state.generate_food();
        state
    }

    /// Fixed spawn cell for the initial single segment.
    fn spawn(tile_count: i8) -> Point {
        Point::new(tile_count / 2, tile_count / 2)
    }

    pub fn tile_count(&self) -> i8 {
        self.tile_count
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn snake(&self) -> &VecDeque<Point> {
        &self.snake
    }

    pub fn head(&self) -> Point {
        // Invariant: the snake always has at least one segment.
        self.snake[0]
    }

    pub fn food(&self) -> Point {
        self.food
    }

    /// Whether the game ended by filling the grid rather than by collision.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Begin play. Valid only from `Idle`; anything else is a no-op.
    ///
    /// A game that has never been steered starts moving rightward.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        if self.heading.is_none() {
            self.heading = Some(Direction::Right);
        }
        self.phase = GamePhase::Running;
    }

    /// Toggle between `Running` and `Paused`. No-op in any other phase.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// Reset to a fresh, not-yet-started game. Valid from any phase.
    ///
    /// The RNG is not reseeded, so food sequences keep advancing across games.
    pub fn restart(&mut self) {
        self.snake.clear();
        self.snake.push_front(Self::spawn(self.tile_count));
        self.heading = None;
        self.score = 0;
        self.won = false;
        self.phase = GamePhase::Idle;
        self.generate_food();
    }

    /// Request a direction change, taking effect at the next step.
    ///
    /// Accepted only while `Running`. The exact reverse of the current heading
    /// is ignored so the snake cannot fold back onto its own neck; any other
    /// direction (including the current one) overwrites the heading.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        if self.heading == Some(dir.opposite()) {
            return false;
        }
        self.heading = Some(dir);
        true
    }

    /// Advance the simulation by one step.
    ///
    /// Returns `None` when not `Running` (idle, paused, or already over).
    /// The new head is prepended before the tail is trimmed so that eating
    /// food and immediately colliding with the now-longer tail is detected.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.phase != GamePhase::Running {
            return None;
        }
        let heading = self.heading?;

        let new_head = self.head().step(heading);
        self.snake.push_front(new_head);

        let ate = new_head == self.food;
        if ate {
            self.score += FOOD_POINTS;
            if !self.generate_food() {
                // No free cell left for food: the player has filled the grid.
                self.won = true;
                self.phase = GamePhase::Over;
                return Some(StepOutcome::Won);
            }
        } else {
            self.snake.pop_back();
        }

        if self.is_terminal() {
            self.phase = GamePhase::Over;
            return Some(StepOutcome::Died);
        }

        Some(if ate {
            StepOutcome::Ate
        } else {
            StepOutcome::Advanced
        })
    }

    /// Head out of bounds, or head on any body segment (post-trim).
    fn is_terminal(&self) -> bool {
        let head = self.head();
        if !head.in_bounds(self.tile_count) {
            return true;
        }
        self.snake.iter().skip(1).any(|&seg| seg == head)
    }

    /// Place food on a uniformly random free cell by rejection sampling.
    ///
    /// Returns false without touching the food when the snake occupies every
    /// cell, so the sampling loop cannot run unbounded on a full grid.
    fn generate_food(&mut self) -> bool {
        let total = (self.tile_count as usize) * (self.tile_count as usize);
        if self.snake.len() >= total {
            return false;
        }
        loop {
            let candidate = Point::new(
                self.rng.next_range(self.tile_count as u32) as i8,
                self.rng.next_range(self.tile_count as u32) as i8,
            );
            if !self.occupied(candidate) {
                self.food = candidate;
                return true;
            }
        }
    }

    fn occupied(&self, p: Point) -> bool {
        self.snake.iter().any(|&seg| seg == p)
    }

    #[cfg(test)]
    pub fn place_food(&mut self, p: Point) {
        self.food = p;
    }

    #[cfg(test)]
    pub fn place_snake(&mut self, segments: &[Point]) {
        self.snake = segments.iter().copied().collect();
    }

    #[cfg(test)]
    pub fn force_heading(&mut self, dir: Direction) {
        self.heading = Some(dir);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
