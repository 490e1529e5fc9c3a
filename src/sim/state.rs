//! Game state and core simulation types
//!
//! Everything that changes over a run lives here; `tick` drives it forward.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hitbox::Hitbox;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run in progress yet (fresh state, waiting for the start command)
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run frozen by the pause toggle
    Paused,
    /// Run ended by a head hit
    GameOver,
}

/// The player: a body position plus three hitboxes derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top-left corner of the body rectangle
    pub pos: Vec2,
    pub head: Hitbox,
    pub left_hand: Hitbox,
    pub right_hand: Hitbox,
}

impl Player {
    /// Place the player horizontally centered on the ground line
    pub fn new(config: &GameConfig) -> Self {
        let p = &config.player;
        let pos = Vec2::new(
            config.playfield.width / 2.0 - p.width / 2.0,
            config.playfield.height - p.height - p.ground_margin,
        );
        let mut player = Self {
            pos,
            head: Hitbox::new(0.0, 0.0, 0.0, 0.0),
            left_hand: Hitbox::new(0.0, 0.0, 0.0, 0.0),
            right_hand: Hitbox::new(0.0, 0.0, 0.0, 0.0),
        };
        player.update_hitboxes(config);
        player
    }

    /// Recompute the derived hitboxes from the current body position
    ///
    /// The boxes are pure functions of `pos` and the static config; nothing
    /// else may move them.
    pub fn update_hitboxes(&mut self, config: &GameConfig) {
        let p = &config.player;
        let center_x = self.pos.x + p.width / 2.0;
        self.head = Hitbox::new(
            center_x - p.head_width / 2.0,
            self.pos.y,
            p.head_width,
            p.head_height,
        );
        let hand_y = self.pos.y + p.hand_drop;
        self.left_hand = Hitbox::new(
            self.pos.x - p.hand_overhang,
            hand_y,
            p.hand_width,
            p.hand_height,
        );
        self.right_hand = Hitbox::new(
            self.pos.x + p.width + p.hand_overhang - p.hand_width,
            hand_y,
            p.hand_width,
            p.hand_height,
        );
    }
}

/// A falling object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingObject {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    /// Downward speed in px/tick, fixed at spawn
    pub speed: f32,
    /// Accumulated spin in radians (cosmetic, never used for collision)
    pub rotation: f32,
}

impl FallingObject {
    /// Collision box at the current position
    pub fn hitbox(&self, config: &GameConfig) -> Hitbox {
        Hitbox::new(self.x, self.y, config.object.width, config.object.height)
    }
}

/// A short-lived visual particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0xRRGGBB color for the render adapter
    pub color: u32,
    /// Remaining lifetime in ticks
    pub life: u32,
    /// Lifetime the particle started with
    pub max_life: u32,
}

impl Particle {
    /// Fraction of lifetime remaining: 1.0 at birth, 0.0 at death
    ///
    /// Render adapters use this to fade particles out.
    pub fn life_fraction(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Things that happened during the most recent tick, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// An object landed in a hand
    Caught { points: u32, at: Vec2 },
    /// An object hit the head; the run is over
    GameOver { score: u32 },
}

/// Complete state of one run (deterministic given config, seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Static balance, fixed at construction
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Score for the current run; only catches raise it
    pub score: u32,
    /// Speed and spawn multiplier derived from score
    pub difficulty: f32,
    /// Ticks advanced since the current run started
    pub time_ticks: u64,
    pub player: Player,
    pub objects: Vec<FallingObject>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events from the most recent tick (cleared at the start of the next)
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state in `Idle`; call [`GameState::start`] to begin a run
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            player: Player::new(&config),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            difficulty: 1.0,
            time_ticks: 0,
            objects: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Start a run: full reset of all per-run state, then `Running`
    pub fn start(&mut self) {
        self.score = 0;
        self.difficulty = 1.0;
        self.time_ticks = 0;
        self.objects.clear();
        self.particles.clear();
        self.events.clear();
        self.player = Player::new(&self.config);
        self.phase = GamePhase::Running;
        log::info!("run started (seed {})", self.seed);
    }

    /// Restart after game over; the same full reset as [`GameState::start`]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Flip between `Running` and `Paused`; no-op in any other phase
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// Emit one catch burst centered at `at`
    ///
    /// The pool is capped at [`MAX_PARTICLES`]; the oldest particles are
    /// evicted to make room.
    pub(crate) fn spawn_burst(&mut self, at: Vec2, color: u32) {
        for _ in 0..BURST_PARTICLES {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let vx = (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD;
            let vy = (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD;
            self.particles.push(Particle {
                pos: at,
                vel: Vec2::new(vx, vy),
                color,
                life: PARTICLE_LIFE_TICKS,
                max_life: PARTICLE_LIFE_TICKS,
            });
        }
    }
}
