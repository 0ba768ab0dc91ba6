//! JavaScript-facing game handle
//!
//! The page owns the canvas, the DOM menus and the raw pointer/keyboard
//! listeners. It forwards normalized points and intents here, calls `frame`
//! from `requestAnimationFrame`, and draws from `snapshot_json`.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::highscores::{HighScoreSink, HighScores};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Slice Frenzy starting...");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    settings: Settings,
    high_scores: HighScores,
    high_score: u64,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let seed = js_sys::Date::now() as u64;
        let high_scores = HighScores::load();
        let high_score = high_scores.top_score().unwrap_or(0);
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            state: GameState::with_field(seed, width, height),
            settings: Settings::load(),
            high_scores,
            high_score,
        }
    }

    /// Start (or restart) a run
    pub fn start(&mut self) {
        sim::start_run(&mut self.state, js_sys::Date::now());
    }

    /// Advance one display frame. Returns false once the loop should stop.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let events = sim::tick(&mut self.state, &self.settings, now_ms);
        for event in events {
            self.handle_event(event);
        }
        self.state.phase == GamePhase::Active
    }

    pub fn gesture_start(&mut self, x: f32, y: f32) {
        sim::gesture_start(&mut self.state, Vec2::new(x, y));
    }

    pub fn gesture_move(&mut self, x: f32, y: f32) {
        sim::gesture_move(&mut self.state, Vec2::new(x, y));
    }

    pub fn gesture_end(&mut self) {
        sim::gesture_end(&mut self.state);
    }

    pub fn pause_toggle(&mut self) {
        sim::pause_toggle(&mut self.state);
    }

    pub fn quit_to_menu(&mut self) {
        if let Some(event) = sim::quit_to_menu(&mut self.state) {
            self.handle_event(event);
        }
    }

    /// Full state as JSON for the renderer
    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Snapshot failed: {}", e);
                String::from("{}")
            }
        }
    }

    pub fn phase(&self) -> String {
        format!("{:?}", self.state.phase)
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn coins(&self) -> u64 {
        self.state.currency
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn blade_color(&self) -> String {
        self.settings.blade_color.clone()
    }

    /// Spend coins; returns false if the balance is too low
    pub fn spend_coins(&mut self, cost: u64) -> bool {
        if self.state.currency < cost {
            return false;
        }
        self.state.currency -= cost;
        true
    }

    pub fn set_blade_color(&mut self, color: String) {
        self.settings.blade_color = color;
        self.settings.save();
    }

    pub fn set_coin_multiplier(&mut self, multiplier: f32) {
        self.settings.coin_multiplier = multiplier;
        self.settings.save();
    }

    pub fn set_hazard_spawn_chance(&mut self, chance: f32) {
        self.settings.hazard_spawn_chance = chance;
        self.settings.save();
    }

    pub fn set_trail_length(&mut self, length: usize) {
        self.settings.trail_length = length;
        self.settings.save();
    }
}

impl WebGame {
    fn handle_event(&mut self, event: GameEvent) {
        if let GameEvent::RunEnded { score } = event {
            self.high_score = self.high_scores.report_run_end(score);
            log::info!("Run ended: score {}, best {}", score, self.high_score);
        }
    }
}
