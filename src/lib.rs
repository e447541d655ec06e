//! Terminal Snake.
//!
//! The crate splits into a pure, deterministic core (`core`), session
//! orchestration with high-score persistence (`engine`, `score`), and thin
//! terminal edges for input and rendering (`input`, `term`). The binary in
//! `main.rs` wires them together on a fixed step cadence.

pub mod core;
pub mod engine;
pub mod input;
pub mod score;
pub mod term;
pub mod types;
