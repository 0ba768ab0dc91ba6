//! Difficulty ramp
//!
//! The spawn speed multiplier creeps up while a run is active and never passes the cap.

use crate::consts::*;

/// Starting multiplier for every run
pub const BASE_DIFFICULTY: f32 = 1.0;

/// Multiplier after one more active tick
#[inline]
pub fn ramp(current: f32) -> f32 {
    (current + DIFFICULTY_RATE / TICKS_PER_SECOND).min(DIFFICULTY_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp_reaches_cap() {
        let mut d = BASE_DIFFICULTY;
        // 0.01 per second takes 150 seconds to gain 1.5
        for _ in 0..(160 * 60) {
            let next = ramp(d);
            assert!(next >= d);
            d = next;
        }
        assert_eq!(d, DIFFICULTY_CAP);
    }

    proptest! {
        #[test]
        fn prop_ramp_monotonic_and_capped(start in 1.0f32..2.5, ticks in 0usize..20_000) {
            let mut d = start;
            for _ in 0..ticks {
                let next = ramp(d);
                prop_assert!(next >= d);
                prop_assert!(next <= DIFFICULTY_CAP);
                d = next;
            }
        }
    }
}
