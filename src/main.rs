//! Slice Frenzy entry point
//!
//! The web build is driven from JavaScript through `platform::web::WebGame`.
//! Natively this runs a headless session with a scripted blade so the
//! simulation can be watched through the log.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use slice_frenzy::consts::TICKS_PER_SECOND;
    use slice_frenzy::sim::{self, GameEvent, GamePhase, GameState};
    use slice_frenzy::{HighScoreSink, HighScores, Settings};

    env_logger::init();
    log::info!("Slice Frenzy (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let frames = std::env::args()
        .nth(2)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(60 * 60);

    let settings = Settings::load();
    let mut high_scores = HighScores::load();
    let mut state = GameState::new(seed);
    let frame_ms = 1000.0 / TICKS_PER_SECOND as f64;
    let mut now = 0.0;

    sim::start_run(&mut state, now);
    log::info!("Headless run with seed {} for {} frames", seed, frames);

    let mut sliced = 0u32;
    let mut hazards = 0u32;
    let mut final_score = None;

    for frame in 0..frames {
        now += frame_ms;

        // Pause for two seconds a third of the way in
        if frame == frames / 3 {
            sim::pause_toggle(&mut state);
        }
        if frame == frames / 3 + 2 * TICKS_PER_SECOND as u64 {
            sim::pause_toggle(&mut state);
        }

        // Swipe through the nearest fruit with no hazard close to it,
        // missing about one in five on purpose
        sim::gesture_end(&mut state);
        if frame % 5 != 0 {
            if let Some(target) = pick_target(&state) {
                sim::gesture_start(&mut state, target - glam::Vec2::new(12.0, 0.0));
                sim::gesture_move(&mut state, target);
            }
        }

        for event in sim::tick(&mut state, &settings, now) {
            match event {
                GameEvent::FruitSliced { .. } => sliced += 1,
                GameEvent::HazardHit { lives_left, .. } => {
                    hazards += 1;
                    log::warn!("Hazard hit, {} lives left", lives_left);
                }
                GameEvent::RunEnded { score } => final_score = Some(score),
                GameEvent::Spawned { .. } => {}
            }
        }

        if state.phase == GamePhase::Over {
            break;
        }
    }

    let score = final_score.unwrap_or(state.score);
    let best = high_scores.report_run_end(score);

    println!("Phase:      {:?}", state.phase);
    println!("Score:      {}", score);
    println!("Coins:      {}", state.currency);
    println!("Lives:      {}", state.lives);
    println!("Sliced:     {}", sliced);
    println!("Hazards:    {}", hazards);
    println!("Difficulty: {:.3}", state.difficulty);
    println!("Best:       {}", best);
}

/// Newest on-screen fruit that can be cut without touching a hazard
#[cfg(not(target_arch = "wasm32"))]
fn pick_target(state: &slice_frenzy::sim::GameState) -> Option<glam::Vec2> {
    use slice_frenzy::sim::EntityKind;

    let on_screen = |p: glam::Vec2| {
        p.x >= 0.0 && p.x <= state.width && p.y >= 0.0 && p.y <= state.height
    };

    state
        .entities
        .iter()
        .rev()
        .filter(|e| matches!(e.kind, EntityKind::Fruit(_)) && on_screen(e.pos))
        .map(|e| e.pos)
        .find(|&p| {
            state
                .entities
                .iter()
                .filter(|h| h.kind.is_hazard())
                .all(|h| !h.is_hit_by(p))
        })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
