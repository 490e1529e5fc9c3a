//! High score leaderboard
//!
//! Top-5 ranked records, persisted as a plain JSON array through a
//! [`ScoreStore`]. Loading is fail-soft: missing or corrupt data yields an
//! empty board and the game carries on.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_PLAYER_NAME;
use crate::persistence::{ScoreStore, StoreError};

/// Maximum number of records kept
pub const MAX_SCORES: usize = 5;

/// A single leaderboard record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    /// Short date string captured at submission time
    pub date: String,
}

/// Ranked leaderboard, always sorted by score descending and capped at
/// [`MAX_SCORES`] entries
///
/// Serializes as the bare record array, so the stored payload reads as
/// `[{"name":...,"score":...,"date":...}, ...]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records in rank order, best first
    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best persisted score, 0 when the board is empty (HUD default)
    pub fn top_score(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Would `score` enter the board? Gates the name-entry prompt.
    ///
    /// Zero never qualifies. Any positive score qualifies while the board
    /// is short; a full board demands strictly beating the lowest record.
    pub fn is_high_score(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a score. Blank names become [`DEFAULT_PLAYER_NAME`].
    ///
    /// Returns the 1-based rank, or `None` if the score fell straight off
    /// the bottom of a full board. Ties rank below the records already
    /// holding that score.
    pub fn submit(&mut self, name: &str, score: u32, date: String) -> Option<usize> {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            trimmed
        };
        let record = ScoreRecord {
            name: name.to_owned(),
            score,
            date,
        };

        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, record);
        self.entries.truncate(MAX_SCORES);

        if pos < MAX_SCORES { Some(pos + 1) } else { None }
    }

    /// Load from the store, degrading to an empty board on any failure
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.read() {
            Ok(Some(json)) => match serde_json::from_str::<Leaderboard>(&json) {
                Ok(mut board) => {
                    board.normalize();
                    log::info!("loaded {} high score(s)", board.len());
                    board
                }
                Err(err) => {
                    log::warn!("high score data is corrupt, starting fresh: {err}");
                    Self::new()
                }
            },
            Ok(None) => {
                log::info!("no saved high scores, starting fresh");
                Self::new()
            }
            Err(err) => {
                log::warn!("could not read high scores, starting fresh: {err}");
                Self::new()
            }
        }
    }

    /// Persist to the store
    ///
    /// On failure the in-memory board is untouched; the caller may retry.
    pub fn save(&self, store: &dyn ScoreStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        store.write(&json)?;
        log::info!("saved {} high score(s)", self.len());
        Ok(())
    }

    /// Re-establish sorting and the size cap after deserializing foreign
    /// data
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_SCORES);
    }
}
