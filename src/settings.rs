//! Gameplay settings
//!
//! Mutated by the shop between (or during) runs and persisted separately from
//! high scores in LocalStorage. The simulation re-reads these on every tick.

use serde::{Deserialize, Serialize};

use crate::platform::storage;

/// Shop-driven settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Blade trail color (CSS color string, cosmetic only)
    pub blade_color: String,
    /// Multiplier on coins earned per fruit (>= 1)
    pub coin_multiplier: f32,
    /// Probability that a spawned entity is a hazard (0.0 - 1.0)
    pub hazard_spawn_chance: f32,
    /// Maximum blade path samples kept
    pub trail_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blade_color: "#FFFF00".to_string(),
            coin_multiplier: 1.0,
            hazard_spawn_chance: 0.15,
            trail_length: 10,
        }
    }
}

impl Settings {
    /// Effective coin multiplier (never below 1)
    pub fn coin_multiplier(&self) -> f32 {
        if self.coin_multiplier.is_finite() {
            self.coin_multiplier.max(1.0)
        } else {
            1.0
        }
    }

    /// Effective hazard chance (clamped to [0, 1])
    pub fn hazard_spawn_chance(&self) -> f32 {
        if self.hazard_spawn_chance.is_nan() {
            0.0
        } else {
            self.hazard_spawn_chance.clamp(0.0, 1.0)
        }
    }

    /// Effective trail length (at least one sample)
    pub fn trail_length(&self) -> usize {
        self.trail_length.max(1)
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "slice_frenzy_settings";

    /// Load settings, falling back to defaults
    pub fn load() -> Self {
        match storage::load_json::<Settings>(Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings from storage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Persist settings
    pub fn save(&self) {
        if storage::save_json(Self::STORAGE_KEY, self) {
            log::info!("Settings saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_starting_shop() {
        let s = Settings::default();
        assert_eq!(s.blade_color, "#FFFF00");
        assert_eq!(s.coin_multiplier(), 1.0);
        assert_eq!(s.hazard_spawn_chance(), 0.15);
        assert_eq!(s.trail_length(), 10);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let s = Settings {
            blade_color: "#FF0000".to_string(),
            coin_multiplier: 0.25,
            hazard_spawn_chance: 3.0,
            trail_length: 0,
        };
        assert_eq!(s.coin_multiplier(), 1.0);
        assert_eq!(s.hazard_spawn_chance(), 1.0);
        assert_eq!(s.trail_length(), 1);

        let s = Settings {
            coin_multiplier: f32::NAN,
            hazard_spawn_chance: f32::NAN,
            ..Settings::default()
        };
        assert_eq!(s.coin_multiplier(), 1.0);
        assert_eq!(s.hazard_spawn_chance(), 0.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"coin_multiplier": 2.0}"#).unwrap();
        assert_eq!(s.coin_multiplier(), 2.0);
        assert_eq!(s.trail_length, 10);
        assert_eq!(s.blade_color, "#FFFF00");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }
}
