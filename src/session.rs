//! Game session facade
//!
//! Owns the simulation state plus the leaderboard and its store, and
//! exposes the operations a frontend drives: start, per-frame input,
//! pause, and score submission. Frontends render from the returned
//! [`FrameSnapshot`]s and never reach into the state directly.

use thiserror::Error;

use crate::config::GameConfig;
use crate::highscores::Leaderboard;
use crate::persistence::{ScoreStore, StoreError};
use crate::platform;
use crate::sim::{FrameSnapshot, GamePhase, GameState, TickInput, tick};

/// Errors from session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation is not valid in the current phase
    #[error("{0}")]
    InvalidTransition(&'static str),
    /// Leaderboard persistence failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One seated player: a live simulation plus the persistent leaderboard
///
/// The leaderboard is loaded once at construction and written back on
/// submission. A failed write leaves the record in memory so the caller
/// can retry with [`Session::save_scores`].
pub struct Session {
    state: GameState,
    leaderboard: Leaderboard,
    store: Box<dyn ScoreStore>,
    /// Guards against recording the same run twice
    submitted: bool,
}

impl Session {
    /// Build a session and load any persisted scores from `store`
    pub fn new(config: GameConfig, seed: u64, store: Box<dyn ScoreStore>) -> Self {
        let leaderboard = Leaderboard::load(store.as_ref());
        Self {
            state: GameState::new(config, seed),
            leaderboard,
            store,
            submitted: false,
        }
    }

    /// Begin a run from `Idle` or replace the current one
    pub fn start(&mut self) {
        self.submitted = false;
        self.state.start();
    }

    /// Start over after game over; identical to [`Session::start`]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Flip between `Running` and `Paused`; no-op in any other phase
    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    /// Advance one tick with `input` and return the frame to render
    pub fn frame(&mut self, input: &TickInput) -> FrameSnapshot {
        tick(&mut self.state, input);
        self.snapshot()
    }

    /// Current frame without advancing the simulation
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state, self.leaderboard.top_score())
    }

    /// Should the frontend prompt for a name right now?
    ///
    /// True only after game over, before submission, for a qualifying
    /// score.
    pub fn is_high_score(&self) -> bool {
        self.state.phase == GamePhase::GameOver
            && !self.submitted
            && self.leaderboard.is_high_score(self.state.score)
    }

    /// Record the finished run under `name` and persist the board
    ///
    /// Returns the 1-based rank (or `None` if the score fell off a full
    /// board). Only valid after game over, once per run. If the store
    /// write fails the record stays on the in-memory board; retry with
    /// [`Session::save_scores`].
    pub fn submit_score(&mut self, name: &str) -> Result<Option<usize>, SessionError> {
        if self.state.phase != GamePhase::GameOver {
            return Err(SessionError::InvalidTransition(
                "scores can only be submitted after game over",
            ));
        }
        if self.submitted {
            return Err(SessionError::InvalidTransition(
                "score already submitted for this run",
            ));
        }

        let date = platform::today_string();
        let rank = self.leaderboard.submit(name, self.state.score, date);
        self.submitted = true;
        self.leaderboard.save(self.store.as_ref())?;
        Ok(rank)
    }

    /// Retry persisting the leaderboard after a failed submission write
    pub fn save_scores(&self) -> Result<(), SessionError> {
        self.leaderboard.save(self.store.as_ref())?;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
