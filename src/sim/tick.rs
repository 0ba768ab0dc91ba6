//! Per-frame simulation tick and run control
//!
//! Kinematics are per tick (one display frame); spawning and fragment expiry
//! follow the wall clock passed in by the host.

use super::collision::resolve_cut;
use super::difficulty::ramp;
use super::spawn::spawn_one;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::settings::Settings;

/// Start a fresh run from any phase
pub fn start_run(state: &mut GameState, now_ms: f64) {
    state.reset_run(now_ms);
    state.phase = GamePhase::Active;
    log::info!("Run started");
}

/// Toggle between Active and Paused. Other phases ignore the signal.
pub fn pause_toggle(state: &mut GameState) {
    match state.phase {
        GamePhase::Active => {
            state.phase = GamePhase::Paused;
            log::info!("Paused");
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Active;
            log::info!("Resumed");
        }
        GamePhase::Menu | GamePhase::Over => {}
    }
}

/// Leave a paused or finished run for the menu.
///
/// Quitting from pause ends the run, so its score is reported via `RunEnded`.
pub fn quit_to_menu(state: &mut GameState) -> Option<GameEvent> {
    match state.phase {
        GamePhase::Paused => {
            state.phase = GamePhase::Menu;
            state.blade.end();
            log::info!("Quit to menu at score {}", state.score);
            Some(GameEvent::RunEnded { score: state.score })
        }
        GamePhase::Over => {
            state.phase = GamePhase::Menu;
            None
        }
        GamePhase::Menu | GamePhase::Active => None,
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, settings: &Settings, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Active {
        return events;
    }

    // 1. Difficulty
    state.difficulty = ramp(state.difficulty);

    // 2. Entities
    let (width, height) = (state.width, state.height);
    for entity in &mut state.entities {
        entity.advance();
    }
    state.entities.retain(|e| !e.is_far_outside(width, height));

    // 3. Fragments: whichever of bounds or expiry comes first removes them
    for fragment in &mut state.fragments {
        fragment.advance();
    }
    state
        .fragments
        .retain(|f| !f.is_outside(width, height) && !f.is_expired(now_ms));

    // 4. Spawn, at most one per tick however long it has been
    if now_ms - state.last_spawn_ms >= SPAWN_INTERVAL_MS {
        let id = state.next_entity_id();
        let entity = spawn_one(
            id,
            width,
            height,
            state.difficulty,
            settings.hazard_spawn_chance(),
            &mut state.rng,
        );
        state.entities.push(entity);
        state.last_spawn_ms = now_ms;
        events.push(GameEvent::Spawned { id });
    }

    // 5. Blade trail
    state.blade.trim_to(settings.trail_length());

    // 6. Cuts
    let outcome = resolve_cut(state, settings, now_ms);
    events.extend(outcome.events);

    events
}
