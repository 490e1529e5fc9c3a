//! Data-driven game balance
//!
//! Everything tunable about a run is decided here at construction time and
//! never changes mid-run. Defaults reproduce the classic arcade balance.
//! Dimensions are in playfield pixels, speeds in pixels per tick.

use serde::{Deserialize, Serialize};

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Player body and hitbox layout
///
/// The body rectangle is the thing that moves; the head and hand hitboxes
/// are derived from its position every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Body width
    pub width: f32,
    /// Body height
    pub height: f32,
    /// Horizontal distance covered per tick while a move signal is held
    pub step: f32,
    /// Head hitbox size, centered on the body, flush with its top
    pub head_width: f32,
    pub head_height: f32,
    /// Hand hitbox size
    pub hand_width: f32,
    pub hand_height: f32,
    /// How far the hands stick out past the body edges
    pub hand_overhang: f32,
    /// Vertical drop from the top of the body to the hands
    pub hand_drop: f32,
    /// Gap between the player's feet and the bottom of the playfield
    pub ground_margin: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 80.0,
            step: 5.0,
            head_width: 30.0,
            head_height: 20.0,
            hand_width: 15.0,
            hand_height: 15.0,
            hand_overhang: 10.0,
            hand_drop: 30.0,
            ground_margin: 20.0,
        }
    }
}

/// Falling object tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    pub width: f32,
    pub height: f32,
    /// Fall speed range sampled at spawn (before the difficulty multiplier)
    pub min_speed: f32,
    pub max_speed: f32,
    /// Base per-tick spawn probability (scaled by difficulty, capped at
    /// one spawn per tick)
    pub spawn_rate: f32,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            width: 25.0,
            height: 30.0,
            min_speed: 2.0,
            max_speed: 6.0,
            spawn_rate: 0.02,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: PlayfieldConfig,
    pub player: PlayerConfig,
    pub object: ObjectConfig,
    /// Ask render adapters to outline the collision hitboxes
    pub debug_hitboxes: bool,
}
