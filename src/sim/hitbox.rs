//! Axis-aligned hitboxes
//!
//! Every collision in the game reduces to one primitive: AABB overlap with
//! strict inequalities, so boxes that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle used for collision testing
///
/// `(x, y)` is the top-left corner; y grows downward like canvas
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point of the box
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap test against another box; see [`overlaps`]
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        overlaps(self, other)
    }
}

/// Axis-aligned rectangle intersection
///
/// Each box contributes its own width and height to the test. Strict
/// comparisons mean edge contact is not an overlap.
#[inline]
pub fn overlaps(a: &Hitbox, b: &Hitbox) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
