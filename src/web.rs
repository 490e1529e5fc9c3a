//! Browser embedding surface
//!
//! Exposes the session to JavaScript through wasm-bindgen. A frontend
//! constructs one [`WebSession`], feeds it held-key flags, calls `frame`
//! once per animation frame, and renders the returned JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::persistence::LocalStorageStore;
use crate::platform;
use crate::session::Session;
use crate::sim::TickInput;

#[wasm_bindgen]
pub struct WebSession {
    inner: Session,
    input: TickInput,
}

#[wasm_bindgen]
impl WebSession {
    /// Build a session backed by LocalStorage
    ///
    /// `seed` drives the run's randomness; `Date.now()` is a fine choice.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WebSession {
        Self::build(seed, GameConfig::default())
    }

    /// Build a session with tuning overrides supplied as JSON
    ///
    /// `config` uses the [`GameConfig`] field names; omitted fields keep
    /// their defaults, so `{"debug_hitboxes":true}` is a valid override.
    pub fn with_config(seed: f64, config: &str) -> Result<WebSession, JsValue> {
        let config: GameConfig =
            serde_json::from_str(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::build(seed, config))
    }

    fn build(seed: f64, config: GameConfig) -> WebSession {
        platform::init_logging();
        let store = Box::new(LocalStorageStore::new());
        WebSession {
            inner: Session::new(config, seed as u64, store),
            input: TickInput::default(),
        }
    }

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    /// Held-key state, applied every frame until changed
    pub fn set_movement(&mut self, left: bool, right: bool) {
        self.input.move_left = left;
        self.input.move_right = right;
    }

    /// Queue a pause toggle for the next frame
    pub fn toggle_pause(&mut self) {
        self.input.toggle_pause = true;
    }

    /// Advance one tick and return the frame snapshot as JSON
    pub fn frame(&mut self) -> Result<String, JsValue> {
        let snapshot = self.inner.frame(&self.input);
        self.input.toggle_pause = false;
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current frame as JSON without advancing the simulation
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> u32 {
        self.inner.state().score
    }

    /// Should the frontend show the name-entry prompt?
    pub fn is_high_score(&self) -> bool {
        self.inner.is_high_score()
    }

    /// Record the finished run; returns the 1-based rank, or `null` if
    /// the score fell off a full board
    pub fn submit_score(&mut self, name: &str) -> Result<Option<u32>, JsValue> {
        match self.inner.submit_score(name) {
            Ok(rank) => Ok(rank.map(|r| r as u32)),
            Err(err) => Err(JsValue::from_str(&err.to_string())),
        }
    }

    /// Leaderboard as a JSON array for the scores screen
    pub fn leaderboard(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.leaderboard())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
