//! Cut detection and resolution
//!
//! The newest blade sample is tested against every live entity, newest entity
//! first. Fruit hits keep the scan going; the first hazard hit stops it, and a
//! hazard that takes the last life ends the run on the spot.

use super::entity::EntityKind;
use super::fragment::{Fragment, FragmentKind, Side};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::EXPLOSION_FRAGMENTS;
use crate::settings::Settings;

/// What a single resolution pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutOutcome {
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
    /// Fragments added to the live set by this pass
    pub fragments_added: usize,
    /// The pass ended the run
    pub run_ended: bool,
}

impl CutOutcome {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Coins earned for a fruit worth `coins` under `multiplier`
pub fn coin_reward(coins: u64, multiplier: f32) -> u64 {
    (coins as f32 * multiplier).round() as u64
}

/// Resolve the blade tip against the live entities
pub fn resolve_cut(state: &mut GameState, settings: &Settings, now_ms: f64) -> CutOutcome {
    let mut outcome = CutOutcome::default();

    let Some(tip) = state.blade.blade_tip() else {
        return outcome;
    };

    let mut new_fragments: Vec<Fragment> = Vec::new();

    // Reverse index walk: removing index i never disturbs the unvisited 0..i
    let mut i = state.entities.len();
    while i > 0 {
        i -= 1;
        let entity = &mut state.entities[i];
        if entity.cut || !entity.is_hit_by(tip) {
            continue;
        }
        entity.cut = true;
        let kind = entity.kind;

        match kind {
            EntityKind::Hazard => {
                let hazard = state.entities.remove(i);
                state.lives = state.lives.saturating_sub(1);
                outcome.events.push(GameEvent::HazardHit {
                    id: hazard.id,
                    lives_left: state.lives,
                });

                if state.lives == 0 {
                    // Fragments gathered earlier in this pass are dropped too
                    log::info!(
                        "Hazard took the last life, run over at score {}",
                        state.score
                    );
                    state.phase = GamePhase::Over;
                    state.blade.end();
                    outcome.events.push(GameEvent::RunEnded { score: state.score });
                    outcome.run_ended = true;
                    return outcome;
                }

                log::debug!("Hazard #{} hit, {} lives left", hazard.id, state.lives);
                for k in 0..EXPLOSION_FRAGMENTS {
                    new_fragments.push(Fragment::from_parent(
                        &hazard,
                        FragmentKind::Explosion,
                        Side::alternating(k),
                        now_ms,
                        &mut state.rng,
                    ));
                }
                // One hazard per pass
                break;
            }
            EntityKind::Fruit(fruit) => {
                let sliced = state.entities.remove(i);
                for side in [Side::Left, Side::Right] {
                    new_fragments.push(Fragment::from_parent(
                        &sliced,
                        FragmentKind::Slice(fruit),
                        side,
                        now_ms,
                        &mut state.rng,
                    ));
                }

                let coins = coin_reward(fruit.coins(), settings.coin_multiplier());
                state.score += fruit.score();
                state.currency += coins;
                log::debug!(
                    "Sliced {} #{} (+{} pts, +{} coins)",
                    fruit.symbol(),
                    sliced.id,
                    fruit.score(),
                    coins
                );
                outcome.events.push(GameEvent::FruitSliced {
                    id: sliced.id,
                    score: fruit.score(),
                    coins,
                });
            }
        }
    }

    outcome.fragments_added = new_fragments.len();
    state.fragments.extend(new_fragments);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::FruitKind;
    use glam::Vec2;

    fn active_state() -> GameState {
        let mut state = GameState::new(7);
        state.phase = GamePhase::Active;
        state
    }

    fn swipe_to(state: &mut GameState, point: Vec2) {
        state.blade.begin(point - Vec2::new(10.0, 0.0));
        state.blade.extend(point);
    }

    #[test]
    fn test_single_point_is_noop() {
        let mut state = active_state();
        let p = Vec2::new(100.0, 100.0);
        state.insert_entity(EntityKind::Fruit(FruitKind::Apple), p, Vec2::ZERO);
        state.blade.begin(Vec2::new(100.0, 100.0));

        let outcome = resolve_cut(&mut state, &Settings::default(), 0.0);
        assert!(outcome.is_empty());
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.score, 0);
        assert!(state.fragments.is_empty());
    }

    #[test]
    fn test_fruit_hit_scores_and_splits() {
        let mut state = active_state();
        let p = Vec2::new(200.0, 200.0);
        state.insert_entity(EntityKind::Fruit(FruitKind::Banana), p, Vec2::ZERO);
        swipe_to(&mut state, Vec2::new(205.0, 200.0));

        let outcome = resolve_cut(&mut state, &Settings::default(), 1_000.0);
        assert_eq!(state.score, 15);
        assert_eq!(state.currency, 3);
        assert!(state.entities.is_empty());
        assert_eq!(outcome.fragments_added, 2);
        assert_eq!(state.fragments.len(), 2);
        assert!(state.fragments.iter().all(|f| f.expires_at_ms == 1_300.0));
        assert_eq!(state.fragments[0].side, Side::Left);
        assert_eq!(state.fragments[1].side, Side::Right);
    }

    #[test]
    fn test_coin_multiplier_doubles_gain() {
        let mut single = active_state();
        let mut double = active_state();
        let mut settings = Settings::default();
        for state in [&mut single, &mut double] {
            let p = Vec2::new(50.0, 50.0);
            state.insert_entity(EntityKind::Fruit(FruitKind::Apple), p, Vec2::ZERO);
            swipe_to(state, Vec2::new(50.0, 50.0));
        }

        resolve_cut(&mut single, &settings, 0.0);
        settings.coin_multiplier = 2.0;
        resolve_cut(&mut double, &settings, 0.0);

        assert_eq!(single.currency, 2);
        assert_eq!(double.currency, 4);
        assert_eq!(single.score, double.score);
    }

    #[test]
    fn test_fruit_hits_do_not_short_circuit() {
        let mut state = active_state();
        let p = Vec2::new(300.0, 300.0);
        state.insert_entity(EntityKind::Fruit(FruitKind::Apple), p, Vec2::ZERO);
        state.insert_entity(EntityKind::Fruit(FruitKind::Orange), p, Vec2::ZERO);
        let far = Vec2::new(600.0, 300.0);
        state.insert_entity(EntityKind::Fruit(FruitKind::Banana), far, Vec2::ZERO);
        swipe_to(&mut state, p);

        let outcome = resolve_cut(&mut state, &Settings::default(), 0.0);
        assert_eq!(state.score, 22);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(outcome.fragments_added, 4);
        assert_eq!(outcome.events.len(), 2);
    }

    #[test]
    fn test_hazard_with_lives_left() {
        let mut state = active_state();
        let p = Vec2::new(400.0, 300.0);
        state.insert_entity(EntityKind::Hazard, p, Vec2::ZERO);
        state.insert_entity(EntityKind::Hazard, p, Vec2::ZERO);
        swipe_to(&mut state, p);

        let outcome = resolve_cut(&mut state, &Settings::default(), 0.0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(outcome.fragments_added, 8);
        assert!(state.fragments.iter().all(|f| f.kind == FragmentKind::Explosion));
        // Only one hazard per pass
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.currency, 0);
    }

    #[test]
    fn test_hazard_takes_last_life() {
        let mut state = active_state();
        state.lives = 1;
        let p = Vec2::new(400.0, 300.0);
        // Fruit is older, so the scan reaches the hazard first
        state.insert_entity(EntityKind::Fruit(FruitKind::Apple), p, Vec2::ZERO);
        state.insert_entity(EntityKind::Hazard, p, Vec2::ZERO);
        swipe_to(&mut state, p);

        let outcome = resolve_cut(&mut state, &Settings::default(), 0.0);
        assert!(outcome.run_ended);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 0);
        assert_eq!(state.currency, 0);
        assert!(state.fragments.is_empty());
        assert_eq!(state.entities.len(), 1);
        assert!(!state.entities[0].cut);
        assert_eq!(outcome.events.last(), Some(&GameEvent::RunEnded { score: 0 }));
    }

    #[test]
    fn test_last_life_drops_fragments_from_same_pass() {
        let mut state = active_state();
        state.lives = 1;
        let p = Vec2::new(400.0, 300.0);
        // Fruit is newer, so it is sliced before the scan reaches the hazard
        state.insert_entity(EntityKind::Hazard, p, Vec2::ZERO);
        state.insert_entity(EntityKind::Fruit(FruitKind::Banana), p, Vec2::ZERO);
        swipe_to(&mut state, p);

        let outcome = resolve_cut(&mut state, &Settings::default(), 0.0);
        assert!(outcome.run_ended);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 15);
        assert_eq!(state.currency, 3);
        assert_eq!(outcome.fragments_added, 0);
        assert!(state.fragments.is_empty());
        assert!(state.entities.is_empty());
        assert_eq!(outcome.events.last(), Some(&GameEvent::RunEnded { score: 15 }));
    }

    #[test]
    fn test_already_cut_entity_is_skipped() {
        let mut state = active_state();
        let p = Vec2::new(10.0, 10.0);
        state.insert_entity(EntityKind::Fruit(FruitKind::Apple), p, Vec2::ZERO);
        state.entities[0].cut = true;
        swipe_to(&mut state, p);

        let outcome = resolve_cut(&mut state, &Settings::default(), 0.0);
        assert!(outcome.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_miss_leaves_state_alone() {
        let mut state = active_state();
        state.insert_entity(EntityKind::Hazard, Vec2::new(100.0, 100.0), Vec2::ZERO);
        swipe_to(&mut state, Vec2::new(130.0, 100.0));

        let outcome = resolve_cut(&mut state, &Settings::default(), 0.0);
        assert!(outcome.is_empty());
        assert_eq!(state.lives, 3);
        assert_eq!(state.entities.len(), 1);
    }
}
