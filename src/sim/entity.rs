//! Sliceable entities: fruit and hazards

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::wrap_degrees;

/// Fruit variants with their scoring data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Orange,
}

impl FruitKind {
    pub const ALL: [FruitKind; 3] = [FruitKind::Apple, FruitKind::Banana, FruitKind::Orange];

    pub fn symbol(&self) -> &'static str {
        match self {
            FruitKind::Apple => "🍎",
            FruitKind::Banana => "🍌",
            FruitKind::Orange => "🍊",
        }
    }

    /// Points awarded for slicing
    pub fn score(&self) -> u64 {
        match self {
            FruitKind::Apple => 10,
            FruitKind::Banana => 15,
            FruitKind::Orange => 12,
        }
    }

    /// Coins awarded for slicing (before the shop multiplier)
    pub fn coins(&self) -> u64 {
        match self {
            FruitKind::Apple => 2,
            FruitKind::Banana => 3,
            FruitKind::Orange => 2,
        }
    }

    /// Symbols for the (left, right) halves
    pub fn slices(&self) -> (&'static str, &'static str) {
        match self {
            FruitKind::Apple => ("🍏", "🍎"),
            FruitKind::Banana => ("🍌", "🌟"),
            FruitKind::Orange => ("🍋", "🍊"),
        }
    }
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Fruit(FruitKind),
    Hazard,
}

impl EntityKind {
    /// Roll a kind: hazard with probability `hazard_chance`, else a uniform fruit.
    /// Chances at or below zero (and NaN) never roll a hazard.
    pub fn roll<R: Rng>(rng: &mut R, hazard_chance: f32) -> Self {
        if rng.random::<f32>() < hazard_chance {
            EntityKind::Hazard
        } else {
            let idx = rng.random_range(0..FruitKind::ALL.len());
            EntityKind::Fruit(FruitKind::ALL[idx])
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            EntityKind::Fruit(fruit) => fruit.symbol(),
            EntityKind::Hazard => "💣",
        }
    }

    pub fn is_hazard(&self) -> bool {
        matches!(self, EntityKind::Hazard)
    }
}

/// A moving fruit or hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Degrees per tick
    pub rotation_speed: f32,
    pub size: f32,
    /// Set once by the cut resolver, immediately before removal
    pub cut: bool,
}

impl Entity {
    /// Create an entity at `origin`, rolling its kind and spin
    pub fn new<R: Rng>(
        id: u32,
        origin: Vec2,
        vel: Vec2,
        hazard_chance: f32,
        rng: &mut R,
    ) -> Self {
        let kind = EntityKind::roll(rng, hazard_chance);
        Self::with_kind(id, kind, origin, vel, rng)
    }

    /// Create an entity of a known kind with random spin
    pub fn with_kind<R: Rng>(
        id: u32,
        kind: EntityKind,
        origin: Vec2,
        vel: Vec2,
        rng: &mut R,
    ) -> Self {
        Self {
            id,
            kind,
            pos: origin,
            vel,
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: (rng.random::<f32>() - 0.5) * ROTATION_SPEED_SPREAD,
            size: ENTITY_SIZE,
            cut: false,
        }
    }

    /// Advance one tick. Must be called exactly once per tick.
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.rotation = wrap_degrees(self.rotation + self.rotation_speed);
    }

    /// Far enough outside the field to be discarded (more than twice its size)
    pub fn is_far_outside(&self, width: f32, height: f32) -> bool {
        crate::outside_field(self.pos, width, height, self.size * 2.0)
    }

    /// True if `point` is strictly inside the hit radius
    pub fn is_hit_by(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.size / 2.0
    }

    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }
}
