//! Slice Frenzy - A fruit-slicing arcade simulation
//!
//! Core modules:
//! - `sim`: Simulation (spawning, kinematics, cut detection, run state machine)
//! - `settings`: Shop-driven gameplay settings
//! - `highscores`: High score leaderboard
//! - `platform`: Browser/native platform abstraction

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::{HighScoreSink, HighScores};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate; all kinematics are expressed per tick
    pub const TICKS_PER_SECOND: f32 = 60.0;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Downward acceleration applied to fragments every tick
    pub const GRAVITY: f32 = 0.5;

    /// Wall-clock spacing between spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Base entity speed range (units/tick), scaled by difficulty
    pub const SPAWN_SPEED_MIN: f32 = 1.0;
    pub const SPAWN_SPEED_MAX: f32 = 3.0;
    /// Perpendicular drift range is [-SPAWN_DRIFT / 2, SPAWN_DRIFT / 2)
    pub const SPAWN_DRIFT: f32 = 1.0;

    /// Entity defaults
    pub const ENTITY_SIZE: f32 = 60.0;
    /// Rotation speed range is [-ROTATION_SPEED_SPREAD / 2, ROTATION_SPEED_SPREAD / 2)
    pub const ROTATION_SPEED_SPREAD: f32 = 5.0;

    /// Fragment defaults
    pub const FRAGMENT_SIZE: f32 = 30.0;
    pub const FRAGMENT_LIFETIME_MS: f64 = 300.0;
    pub const FRAGMENT_PRUNE_MARGIN: f32 = 50.0;
    pub const FRAGMENT_VELOCITY_SCALE: f32 = 1.5;
    pub const FRAGMENT_SIDE_IMPULSE: f32 = 5.0;
    /// Vertical jitter range is [-FRAGMENT_JITTER / 2, FRAGMENT_JITTER / 2)
    pub const FRAGMENT_JITTER: f32 = 3.0;
    pub const EXPLOSION_FRAGMENTS: usize = 8;

    /// Difficulty ramp (multiplier gained per second of active play, and its cap)
    pub const DIFFICULTY_RATE: f32 = 0.01;
    pub const DIFFICULTY_CAP: f32 = 2.5;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// True if `pos` lies outside the `width` x `height` field by more than `margin` on any axis
#[inline]
pub fn outside_field(pos: Vec2, width: f32, height: f32, margin: f32) -> bool {
    pos.x < -margin || pos.x > width + margin || pos.y < -margin || pos.y > height + margin
}
