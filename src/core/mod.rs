//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI, persistence, or I/O.

pub mod game_state;
pub mod rng;

// Re-export commonly used types
pub use game_state::{GameState, StepOutcome};
pub use rng::SimpleRng;
