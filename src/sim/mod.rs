//! Deterministic simulation module
//!
//! All chase logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No RNG, the same inputs always replay the same chase
//! - No rendering or platform dependencies

pub mod arena;
pub mod capture;
pub mod hop;
pub mod intent;
pub mod state;
pub mod tick;

pub use arena::ArenaBounds;
pub use capture::{capture_fires, circles_overlap};
pub use hop::hop_direction;
pub use intent::{PointerIntent, pointer_intent};
pub use state::{
    Attachment, ChaseState, Hunter, HunterSnapshot, HunterState, Quarry, QuarryState,
};
pub use tick::{TickInput, tick};
