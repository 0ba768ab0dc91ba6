//! Simulation module
//!
//! All gameplay logic lives here:
//! - Per-tick kinematics, wall-clock spawning and fragment expiry
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod fragment;
pub mod gesture;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CutOutcome, coin_reward, resolve_cut};
pub use entity::{Entity, EntityKind, FruitKind};
pub use fragment::{Fragment, FragmentKind, Side};
pub use gesture::GesturePath;
pub use input::{gesture_end, gesture_move, gesture_start};
pub use spawn::{Edge, spawn_from_edge, spawn_one};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{pause_toggle, quit_to_menu, start_run, tick};
