//! Per-state display colors
//!
//! The presentation layer tints each entity by indexing a fixed palette with
//! the entity's state ordinal. Plain data only; the sim never renders.

use crate::sim::{HunterState, QuarryState};

/// RGB color, components in 0..=1
pub type Rgb = [f32; 3];

/// Hunter palette: slow-move, fast-move, diving, recovering
pub const HUNTER_PALETTE: [Rgb; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
];

/// Quarry palette: idle, hop, caught, plus a reserved slot so both palettes
/// share a length
pub const QUARRY_PALETTE: [Rgb; 4] = [
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 0.0],
];

/// Display color for a hunter state
#[inline]
pub fn hunter_color(state: &HunterState) -> Rgb {
    HUNTER_PALETTE[state.index()]
}

/// Display color for a quarry state
#[inline]
pub fn quarry_color(state: &QuarryState) -> Rgb {
    QUARRY_PALETTE[state.index()]
}
