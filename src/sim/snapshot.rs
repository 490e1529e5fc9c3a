//! Read-only frame snapshots for render adapters
//!
//! The simulation never draws. Once per frame the caller captures a
//! snapshot and hands it to whatever paints the screen: a canvas shell, a
//! terminal view, a test probe. Snapshots borrow nothing, so adapters can
//! keep or ship them freely.

use glam::Vec2;
use serde::Serialize;

use super::hitbox::Hitbox;
use super::state::{GamePhase, GameState};

/// Player pose for drawing: body position plus the three live hitboxes
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub head: Hitbox,
    pub left_hand: Hitbox,
    pub right_hand: Hitbox,
}

/// A falling object: where it is and how far it has spun
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObjectView {
    pub pos: Vec2,
    pub rotation: f32,
}

/// A particle with its fade state
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// 0xRRGGBB
    pub color: u32,
    /// 1.0 at birth down to 0.0 at death; drives the adapter's alpha
    pub life_fraction: f32,
}

/// Everything a render adapter needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    /// Convenience flag for pause overlays
    pub paused: bool,
    pub score: u32,
    /// Best persisted score, for the HUD
    pub high_score: u32,
    pub difficulty: f32,
    pub player: PlayerView,
    pub objects: Vec<ObjectView>,
    pub particles: Vec<ParticleView>,
    /// Adapters should outline the hitboxes when set
    pub debug_hitboxes: bool,
}

impl FrameSnapshot {
    /// Capture the current state; `high_score` comes from the leaderboard
    pub fn capture(state: &GameState, high_score: u32) -> Self {
        Self {
            phase: state.phase,
            paused: state.phase == GamePhase::Paused,
            score: state.score,
            high_score,
            difficulty: state.difficulty,
            player: PlayerView {
                pos: state.player.pos,
                head: state.player.head,
                left_hand: state.player.left_hand,
                right_hand: state.player.right_hand,
            },
            objects: state
                .objects
                .iter()
                .map(|o| ObjectView {
                    pos: Vec2::new(o.x, o.y),
                    rotation: o.rotation,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    color: p.color,
                    life_fraction: p.life_fraction(),
                })
                .collect(),
            debug_hitboxes: state.config.debug_hitboxes,
        }
    }
}
