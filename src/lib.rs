//! Pounce - a top-down hunter/quarry catch game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machines, movement, capture)
//! - `tuning`: Data-driven behavior tuning
//! - `palette`: Per-state display colors for the presentation layer

pub mod palette;
pub mod sim;
pub mod tuning;

pub use sim::{ChaseState, TickInput, tick};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default playable region half extent (world units, origin centered)
    pub const ARENA_HALF_EXTENT: Vec2 = Vec2::new(8.0, 5.0);
    /// Default world position of the screen's top-right corner, used to
    /// normalize pointer offsets into a 0..~1 magnitude
    pub const SCREEN_EXTENT: Vec2 = Vec2::new(8.9, 5.0);
}

/// Normalize an angle in degrees to [-180, 180)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Shortest signed difference from one bearing to another, in degrees
#[inline]
pub fn delta_degrees(from: f32, to: f32) -> f32 {
    normalize_degrees(to - from)
}

/// Step a bearing toward a target by at most `max_delta` degrees per call
#[inline]
pub fn move_toward_degrees(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_degrees(current, target);
    if delta.abs() <= max_delta {
        normalize_degrees(target)
    } else {
        normalize_degrees(current + max_delta.copysign(delta))
    }
}

/// Unit vector for a bearing in degrees
#[inline]
pub fn bearing_to_vec(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
