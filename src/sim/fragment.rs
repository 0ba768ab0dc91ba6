//! Split fragments - debris thrown off when an entity is cut

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, FruitKind};
use crate::consts::*;
use crate::wrap_degrees;

/// Which way a fragment is pushed from its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Alternate left/right by index (even = left)
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 { Side::Left } else { Side::Right }
    }

    fn sign(&self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Visual category of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentKind {
    /// Half of a sliced fruit
    Slice(FruitKind),
    /// Hazard explosion debris
    Explosion,
}

/// A short-lived, gravity-affected piece of debris
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub side: Side,
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub size: f32,
    /// Wall-clock deadline (ms) after which the fragment is removed
    pub expires_at_ms: f64,
}

impl Fragment {
    /// Break a fragment off `parent`, pushed toward `side`
    pub fn from_parent<R: Rng>(
        parent: &Entity,
        kind: FragmentKind,
        side: Side,
        now_ms: f64,
        rng: &mut R,
    ) -> Self {
        let jitter = (rng.random::<f32>() - 0.5) * FRAGMENT_JITTER;
        let vel = Vec2::new(
            parent.vel.x * FRAGMENT_VELOCITY_SCALE + FRAGMENT_SIDE_IMPULSE * side.sign(),
            parent.vel.y * FRAGMENT_VELOCITY_SCALE + jitter,
        );

        Self {
            kind,
            side,
            pos: parent.pos,
            vel,
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: parent.rotation_speed * 2.0 * side.sign(),
            size: FRAGMENT_SIZE,
            expires_at_ms: now_ms + FRAGMENT_LIFETIME_MS,
        }
    }

    /// Advance one tick: gravity first, then integrate
    pub fn advance(&mut self) {
        self.vel.y += GRAVITY;
        self.pos += self.vel;
        self.rotation = wrap_degrees(self.rotation + self.rotation_speed);
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        crate::outside_field(self.pos, width, height, FRAGMENT_PRUNE_MARGIN)
    }

    pub fn symbol(&self) -> &'static str {
        match self.kind {
            FragmentKind::Slice(fruit) => {
                let (left, right) = fruit.slices();
                match self.side {
                    Side::Left => left,
                    Side::Right => right,
                }
            }
            FragmentKind::Explosion => "💥",
        }
    }

    /// Color tag for the renderer
    pub fn color(&self) -> &'static str {
        match self.kind {
            FragmentKind::Slice(_) => "white",
            FragmentKind::Explosion => "orange",
        }
    }
}
