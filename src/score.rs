//! High-score persistence.
//!
//! The engine treats the store as a tiny key-value collaborator: load one
//! integer at startup, save it at game over when beaten. The file-backed
//! implementation keeps a one-field JSON record next to the binary; tests
//! and ephemeral runs use the in-memory implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default record location, relative to the working directory.
pub const HIGH_SCORE_FILE: &str = ".tui-snake-high-score.json";

/// Persisted high score, one integer across game sessions.
pub trait HighScoreStore {
    /// Load the stored high score. Absent storage reads as 0.
    fn load(&self) -> Result<u32>;

    /// Persist a new high score.
    fn save(&mut self, value: u32) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// JSON-file-backed store.
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}

impl HighScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading high score file {}", self.path.display()))?;
        let record: HighScoreRecord = serde_json::from_str(&raw)
            .with_context(|| format!("parsing high score file {}", self.path.display()))?;
        Ok(record.high_score)
    }

    fn save(&mut self, value: u32) -> Result<()> {
        let record = HighScoreRecord { high_score: value };
        let raw = serde_json::to_string(&record)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing high score file {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store for tests and runs without persistence.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    value: u32,
}

impl MemoryScoreStore {
    pub fn with_value(value: u32) -> Self {
        Self { value }
    }
}

impl HighScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, value: u32) -> Result<()> {
        self.value = value;
        Ok(())
    }
}
