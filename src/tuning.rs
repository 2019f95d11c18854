//! Data-driven behavior tuning
//!
//! One immutable struct tree handed to the simulation at construction.
//! Nothing in the sim reads tunables from globals, so two states built from
//! different tunings can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Hunter movement and dive tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HunterTuning {
    /// Top forward speed (world units per second)
    pub max_speed: f32,
    /// Speed above which slow movement shifts into fast movement
    pub fast_threshold: f32,
    /// Requested speed for the mid pointer band
    pub slow_speed: f32,
    /// Speed ramp step, applied once per tick
    pub inc_speed: f32,
    /// Normalized pointer magnitude above which full speed is requested
    pub magnitude_fast: f32,
    /// Normalized pointer magnitude above which slow speed is requested
    pub magnitude_slow: f32,
    /// Fast-move turn rate (degrees per tick)
    pub fast_rotate_speed: f32,
    /// Turn deviation (degrees) at or beyond which fast movement bleeds speed
    pub fast_rotate_max: f32,
    /// Dive duration (seconds)
    pub dive_time: f32,
    /// Post-dive recovery duration (seconds)
    pub dive_recovery_time: f32,
    /// Dive travel distance (world units)
    pub dive_distance: f32,
}

impl Default for HunterTuning {
    fn default() -> Self {
        let max_speed = 5.0;
        Self {
            max_speed,
            fast_threshold: max_speed * 0.8,
            slow_speed: max_speed * 0.33,
            inc_speed: 0.01,
            magnitude_fast: 0.6,
            magnitude_slow: 0.06,
            fast_rotate_speed: 2.0,
            fast_rotate_max: 15.0,
            dive_time: 0.3,
            dive_recovery_time: 0.5,
            dive_distance: 3.0,
        }
    }
}

/// Quarry hop and startle tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarryTuning {
    /// Hop duration (seconds)
    pub hop_time: f32,
    /// Hop travel speed (world units per second)
    pub hop_speed: f32,
    /// Hunter distance below which an idle quarry startles
    pub scared_distance: f32,
    /// Inward shrink applied to the arena when validating hop landings
    pub arena_margin: f32,
}

impl QuarryTuning {
    /// Distance one full hop covers
    #[inline]
    pub fn hop_travel(&self) -> f32 {
        self.hop_speed * self.hop_time
    }
}

impl Default for QuarryTuning {
    fn default() -> Self {
        Self {
            hop_time: 0.2,
            hop_speed: 6.5,
            scared_distance: 3.0,
            arena_margin: 0.5,
        }
    }
}

/// Capture detection tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureTuning {
    /// Hunter body radius for the overlap test (world units)
    pub hunter_radius: f32,
    /// Quarry body radius for the overlap test (world units)
    pub quarry_radius: f32,
    /// Where a caught quarry rides, in the hunter's local frame
    pub caught_offset: Vec2,
}

impl Default for CaptureTuning {
    fn default() -> Self {
        Self {
            hunter_radius: 0.5,
            quarry_radius: 0.5,
            caught_offset: Vec2::new(0.0, -0.5),
        }
    }
}

/// Complete tuning tree handed to `ChaseState::new`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tuning {
    pub hunter: HunterTuning,
    pub quarry: QuarryTuning,
    pub capture: CaptureTuning,
}
