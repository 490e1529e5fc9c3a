//! Catchfall - a retro catch-the-falling-objects arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `config`: Data-driven game balance
//! - `highscores`: Top-5 leaderboard
//! - `persistence`: Leaderboard storage backends (file, LocalStorage, memory)
//! - `platform`: Browser/native logging and clock helpers
//! - `session`: Caller-owned facade gluing simulation, leaderboard and storage
//! - `web`: wasm-bindgen bindings over the session (wasm builds only)
//!
//! The crate stops at the simulation boundary: rendering, raw input devices
//! and UI widgets live outside, fed by [`sim::FrameSnapshot`] and driving the
//! game through [`sim::TickInput`] and [`session::Session`] commands.

pub mod config;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::GameConfig;
pub use highscores::Leaderboard;
pub use session::Session;

/// Fixed game rules (tunable balance lives in [`config::GameConfig`])
pub mod consts {
    /// Points awarded per caught object
    pub const CATCH_POINTS: u32 = 10;
    /// Score needed to raise the difficulty multiplier by one
    pub const DIFFICULTY_SCORE_DIVISOR: f32 = 500.0;

    /// Particles emitted per catch burst
    pub const BURST_PARTICLES: usize = 8;
    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE_TICKS: u32 = 30;
    /// Full width of the particle velocity range per axis (px/tick)
    pub const PARTICLE_SPREAD: f32 = 8.0;
    /// Catch burst color (0xRRGGBB)
    pub const CATCH_PARTICLE_COLOR: u32 = 0xFFFF00;
    /// Maximum live particles; the oldest are evicted first
    pub const MAX_PARTICLES: usize = 256;

    /// Object spin per tick (radians, cosmetic only)
    pub const OBJECT_ROTATION_STEP: f32 = 0.1;

    /// Name recorded when the player submits a blank one
    pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";
}
