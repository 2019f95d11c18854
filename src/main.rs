//! Pounce entry point
//!
//! Headless demo driver: synthesizes pointer input that chases the quarry,
//! runs the fixed-timestep loop, and dumps the final state as JSON. The
//! chase itself is deterministic; the RNG only jitters the synthesized
//! pointer, so a seed fully determines the run.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use pounce::Tuning;
use pounce::consts::{MAX_SUBSTEPS, SIM_DT};
use pounce::palette::{hunter_color, quarry_color};
use pounce::sim::{ChaseState, TickInput, tick};

/// Frame cap so a demo that never closes the distance still terminates
const MAX_FRAMES: u32 = 7200;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Pounce demo starting with seed: {}", seed);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = ChaseState::new(Tuning::default(), Vec2::new(-4.0, 0.0), Vec2::new(3.0, 1.5));

    let mut accumulator = 0.0f32;
    let mut hunter_was = state.hunter.state.index();
    let mut quarry_was = state.quarry.state.index();

    'frames: for _ in 0..MAX_FRAMES {
        // Uneven frame pacing exercises the substep loop
        let frame_dt = SIM_DT * rng.random_range(0.8..1.6);
        accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = synthesize_input(&state, &mut rng);
            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            report_transitions(&state, &mut hunter_was, &mut quarry_was);
            if state.quarry.state.is_caught() {
                log::info!(
                    "caught at tick {} ({:.1}s)",
                    state.time_ticks,
                    state.time_ticks as f32 * SIM_DT
                );
                break 'frames;
            }
        }
    }

    if !state.quarry.state.is_caught() {
        log::warn!("demo ended without a catch after {} ticks", state.time_ticks);
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize final state: {}", err),
    }
}

/// Aim the pointer at the quarry with a little jitter, and hold the dive
/// trigger now and then once the quarry is inside dive range
fn synthesize_input(state: &ChaseState, rng: &mut Pcg32) -> TickInput {
    let jitter = Vec2::new(rng.random_range(-0.3..0.3), rng.random_range(-0.3..0.3));
    let target = state.quarry_world_position() + jitter;

    let in_range =
        state.hunter.position.distance(target) < state.tuning.hunter.dive_distance * 0.9;
    let dive = in_range && rng.random::<f32>() < 0.2;

    TickInput {
        pointer_world: target,
        dive,
        ..Default::default()
    }
}

/// Log state changes with the debug tint a renderer would show
fn report_transitions(state: &ChaseState, hunter_was: &mut usize, quarry_was: &mut usize) {
    let hunter_now = state.hunter.state.index();
    if hunter_now != *hunter_was {
        log::info!(
            "tick {}: hunter -> {:?} (tint {:?})",
            state.time_ticks,
            state.hunter.state,
            hunter_color(&state.hunter.state)
        );
        *hunter_was = hunter_now;
    }

    let quarry_now = state.quarry.state.index();
    if quarry_now != *quarry_was {
        log::info!(
            "tick {}: quarry -> {:?} (tint {:?})",
            state.time_ticks,
            state.quarry.state,
            quarry_color(&state.quarry.state)
        );
        *quarry_was = quarry_now;
    }
}
