//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view maps game state onto a
//! `Canvas` of grid cells, and the terminal canvas flushes those cells to a
//! real terminal via crossterm. Keeping the view pure means the whole scene
//! can be asserted on in tests through `RecordingCanvas`.

pub mod canvas;
pub mod game_view;
pub mod renderer;

pub use canvas::{Canvas, DrawOp, RecordingCanvas, Rgb};
pub use game_view::{key_hints, overlay_lines, status_line, GameView, Palette};
pub use renderer::TerminalCanvas;
