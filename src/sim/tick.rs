//! Fixed timestep simulation tick
//!
//! Advances the hunter, then the quarry, then the capture check, in that
//! order, once per fixed timestep. The capture check reads the hunter as
//! advanced this tick and the quarry's position from before its own advance,
//! which keeps capture timing deterministic.

use glam::Vec2;

use super::arena::ArenaBounds;
use super::capture::capture_fires;
use super::hop::hop_direction;
use super::intent::{PointerIntent, pointer_intent};
use super::state::{ChaseState, Hunter, HunterSnapshot, HunterState, Quarry, QuarryState};
use crate::consts::SCREEN_EXTENT;
use crate::tuning::{HunterTuning, QuarryTuning};
use crate::{delta_degrees, move_toward_degrees};

/// External inputs for a single tick (deterministic)
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Pointer position in world space
    pub pointer_world: Vec2,
    /// Dive trigger, true while held
    pub dive: bool,
    /// Playable region for hop planning
    pub arena: ArenaBounds,
    /// World position of the screen's top-right corner, used to normalize
    /// pointer magnitude
    pub screen_extent: Vec2,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pointer_world: Vec2::ZERO,
            dive: false,
            arena: ArenaBounds::default(),
            screen_extent: SCREEN_EXTENT,
        }
    }
}

/// Advance the chase by one fixed timestep
pub fn tick(state: &mut ChaseState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    let now = state.time_ticks;

    let intent = pointer_intent(
        state.hunter.position,
        input.pointer_world,
        input.screen_extent,
        &state.tuning.hunter,
    );
    advance_hunter(
        &mut state.hunter,
        &state.tuning.hunter,
        &intent,
        input.dive,
        now,
        dt,
    );

    // Post-advance hunter, pre-advance quarry position for the capture check
    let hunter_view = state.hunter.snapshot();
    let quarry_pos_before = state.quarry.position;
    advance_quarry(
        &mut state.quarry,
        &state.tuning.quarry,
        &hunter_view,
        &input.arena,
        now,
        dt,
    );

    if capture_fires(
        &hunter_view,
        &state.quarry.state,
        quarry_pos_before,
        &state.tuning.capture,
    ) {
        state
            .quarry
            .attach_to(hunter_view.id, state.tuning.capture.caught_offset);
        log::debug!(
            "quarry {} caught by hunter {} at tick {}",
            state.quarry.id,
            hunter_view.id,
            now
        );
    }
}

/// Seconds elapsed since a recorded tick stamp
#[inline]
fn elapsed_secs(now: u64, started_at: u64, dt: f32) -> f32 {
    (now - started_at) as f32 * dt
}

/// Advance the hunter's state machine by one tick.
///
/// The pointer intent lands on the hunter in every state; only SlowMove and
/// FastMove actually steer by it. When a speed-threshold shift and the dive
/// trigger fire on the same tick, the dive wins.
fn advance_hunter(
    hunter: &mut Hunter,
    tuning: &HunterTuning,
    intent: &PointerIntent,
    dive_held: bool,
    now: u64,
    dt: f32,
) {
    hunter.target_angle = intent.target_angle;
    hunter.target_speed = intent.target_speed;

    match hunter.state {
        HunterState::SlowMove => {
            hunter.orientation = hunter.target_angle;
            step_forward(hunter, dt);
            hunter.speed += tuning.inc_speed;

            if hunter.speed > tuning.fast_threshold {
                hunter.state = HunterState::FastMove;
            }
            if dive_held {
                hunter.start_dive(tuning, now);
                log::debug!("hunter {} dives from slow-move at tick {}", hunter.id, now);
            }
        }
        HunterState::FastMove => {
            // Deviation is measured before this tick's turn
            let deviation = delta_degrees(hunter.orientation, hunter.target_angle).abs();
            if deviation >= tuning.fast_rotate_max {
                hunter.speed -= tuning.inc_speed;
            } else {
                hunter.speed += tuning.inc_speed;
            }
            hunter.orientation = move_toward_degrees(
                hunter.orientation,
                hunter.target_angle,
                tuning.fast_rotate_speed,
            );
            step_forward(hunter, dt);

            if hunter.speed < tuning.fast_threshold {
                hunter.state = HunterState::SlowMove;
            }
            if dive_held {
                hunter.start_dive(tuning, now);
                log::debug!("hunter {} dives from fast-move at tick {}", hunter.id, now);
            }
        }
        HunterState::Diving {
            start,
            end,
            started_at,
        } => {
            let elapsed = elapsed_secs(now, started_at, dt);
            let t = (elapsed / tuning.dive_time).clamp(0.0, 1.0);
            hunter.position = start.lerp(end, t);

            if elapsed >= tuning.dive_time {
                hunter.start_recovering(now);
            }
        }
        HunterState::Recovering { started_at } => {
            if elapsed_secs(now, started_at, dt) >= tuning.dive_recovery_time {
                hunter.state = HunterState::SlowMove;
            }
        }
    }
}

/// Advance the quarry's state machine by one tick. Caught is terminal, so
/// a caught quarry ignores the hunter entirely.
fn advance_quarry(
    quarry: &mut Quarry,
    tuning: &QuarryTuning,
    hunter: &HunterSnapshot,
    arena: &ArenaBounds,
    now: u64,
    dt: f32,
) {
    match quarry.state {
        QuarryState::Idle => {
            let startled = quarry.position.distance(hunter.position) < tuning.scared_distance;
            if startled {
                let direction = hop_direction(
                    quarry.position,
                    hunter.position,
                    tuning.hop_travel(),
                    arena,
                    tuning.arena_margin,
                );
                quarry.start_hop(direction, now);
                log::debug!(
                    "quarry {} startled at tick {}, hop direction ({:.2}, {:.2})",
                    quarry.id,
                    now,
                    direction.x,
                    direction.y
                );
            }
        }
        QuarryState::Hop {
            direction,
            started_at,
        } => {
            quarry.position += direction * tuning.hop_speed * dt;
            if elapsed_secs(now, started_at, dt) >= tuning.hop_time {
                quarry.state = QuarryState::Idle;
            }
        }
        QuarryState::Caught { .. } => {}
    }
}

/// Advance along the current facing's forward vector
fn step_forward(hunter: &mut Hunter, dt: f32) {
    let forward = hunter.forward();
    hunter.position += forward * hunter.speed * dt;
}
