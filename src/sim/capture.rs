//! Capture detection
//!
//! Turns spatial overlap into the quarry's terminal Caught state. The check
//! only fires while the hunter is mid-dive; brushing past the quarry in any
//! other state does nothing.

use glam::Vec2;

use super::state::{HunterSnapshot, QuarryState};
use crate::tuning::CaptureTuning;

/// True when two circles overlap (touching circles do not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Capture check for one tick.
///
/// `hunter` is the post-advance snapshot; `quarry_pos` is the quarry's
/// position sampled before its own advance this tick. An already caught
/// quarry can never be captured again.
pub fn capture_fires(
    hunter: &HunterSnapshot,
    quarry_state: &QuarryState,
    quarry_pos: Vec2,
    tuning: &CaptureTuning,
) -> bool {
    hunter.diving
        && !quarry_state.is_caught()
        && circles_overlap(
            hunter.position,
            tuning.hunter_radius,
            quarry_pos,
            tuning.quarry_radius,
        )
}
