//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick integration only (one tick per scheduled frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod hitbox;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use hitbox::{Hitbox, overlaps};
pub use snapshot::{FrameSnapshot, ObjectView, ParticleView, PlayerView};
pub use state::{FallingObject, GameEvent, GamePhase, GameState, Particle, Player};
pub use tick::{TickInput, tick};
