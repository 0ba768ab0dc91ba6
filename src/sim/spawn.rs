//! Edge spawning
//!
//! Entities enter from one of the four field edges, one object size off-screen,
//! heading inward with a little sideways drift.

use glam::Vec2;
use rand::Rng;

use super::entity::Entity;
use crate::consts::*;

/// Field edge an entity enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Spawn one entity from a uniformly chosen edge
pub fn spawn_one<R: Rng>(
    id: u32,
    width: f32,
    height: f32,
    difficulty: f32,
    hazard_chance: f32,
    rng: &mut R,
) -> Entity {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    spawn_from_edge(id, edge, width, height, difficulty, hazard_chance, rng)
}

/// Spawn one entity from a given edge
pub fn spawn_from_edge<R: Rng>(
    id: u32,
    edge: Edge,
    width: f32,
    height: f32,
    difficulty: f32,
    hazard_chance: f32,
    rng: &mut R,
) -> Entity {
    let speed = rng.random_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX) * difficulty;
    let drift = (rng.random::<f32>() - 0.5) * SPAWN_DRIFT;
    let offset = ENTITY_SIZE;

    let (origin, vel) = match edge {
        Edge::Top => (
            Vec2::new(rng.random_range(0.0..width), -offset),
            Vec2::new(drift, speed),
        ),
        Edge::Bottom => (
            Vec2::new(rng.random_range(0.0..width), height + offset),
            Vec2::new(drift, -speed),
        ),
        Edge::Left => (
            Vec2::new(-offset, rng.random_range(0.0..height)),
            Vec2::new(speed, drift),
        ),
        Edge::Right => (
            Vec2::new(width + offset, rng.random_range(0.0..height)),
            Vec2::new(-speed, drift),
        ),
    };

    let entity = Entity::new(id, origin, vel, hazard_chance, rng);
    log::debug!(
        "Spawned {} #{} from {:?} at ({:.0}, {:.0})",
        entity.symbol(),
        id,
        edge,
        origin.x,
        origin.y
    );
    entity
}
