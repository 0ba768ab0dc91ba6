//! Pointer gesture handlers
//!
//! The host translates raw pointer events into field coordinates and calls
//! these between ticks. They only start, extend, or clear the blade path.

use glam::Vec2;

use super::state::GameState;

/// Pointer pressed: start a fresh gesture (active runs only)
pub fn gesture_start(state: &mut GameState, point: Vec2) {
    if !state.is_active() {
        return;
    }
    state.blade.begin(point);
}

/// Pointer moved: extend the gesture if one is in progress during an active run
pub fn gesture_move(state: &mut GameState, point: Vec2) {
    if !state.is_active() {
        return;
    }
    state.blade.extend(point);
}

/// Pointer released or left the field
pub fn gesture_end(state: &mut GameState) {
    state.blade.end();
}
