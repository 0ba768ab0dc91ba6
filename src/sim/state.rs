//! Game state and run phase
//!
//! Everything a run owns lives in one `GameState`; the tick, the cut resolver,
//! and the input handlers all borrow it explicitly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::BASE_DIFFICULTY;
use super::entity::Entity;
use super::fragment::Fragment;
use super::gesture::GesturePath;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start
    #[default]
    Menu,
    /// Simulation running
    Active,
    /// Simulation frozen
    Paused,
    /// Lives exhausted
    Over,
}

/// Something the host may want to react to (audio, persistence, HUD pops)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32 },
    FruitSliced { id: u32, score: u64, coins: u64 },
    HazardHit { id: u32, lives_left: u8 },
    /// Run finished with this score (lives exhausted or quit from pause)
    RunEnded { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the run RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Coins; survive restarts so they can be spent between runs
    pub currency: u64,
    pub lives: u8,
    /// Spawn speed multiplier
    pub difficulty: f32,
    /// Field size in world units
    pub width: f32,
    pub height: f32,
    /// Live entities in creation order
    pub entities: Vec<Entity>,
    /// Live fragments in creation order
    pub fragments: Vec<Fragment>,
    pub blade: GesturePath,
    /// Wall-clock time of the last spawn (ms)
    pub last_spawn_ms: f64,
    /// Serialized with the state so a restored run continues the same stream
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a state sitting in the menu, with the default field size
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, FIELD_WIDTH, FIELD_HEIGHT)
    }

    pub fn with_field(seed: u64, width: f32, height: f32) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            score: 0,
            currency: 0,
            lives: STARTING_LIVES,
            difficulty: BASE_DIFFICULTY,
            width,
            height,
            entities: Vec::new(),
            fragments: Vec::new(),
            blade: GesturePath::new(),
            last_spawn_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything a run owns. Currency is kept.
    pub fn reset_run(&mut self, now_ms: f64) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.difficulty = BASE_DIFFICULTY;
        self.entities.clear();
        self.fragments.clear();
        self.blade.end();
        self.last_spawn_ms = now_ms;
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Place an entity directly (scripted scenarios and tests)
    pub fn insert_entity(&mut self, kind: super::entity::EntityKind, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        let entity = Entity::with_kind(id, kind, pos, vel, &mut self.rng);
        self.entities.push(entity);
        id
    }
}
