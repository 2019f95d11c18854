//! Playable region geometry
//!
//! The arena is an axis-aligned box given by its min/max corners. Hop
//! planning validates candidate landing spots against the box shrunk inward
//! by a margin, so the quarry never plans a hop that ends flush with a wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ARENA_HALF_EXTENT;

/// Axis-aligned playable region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    /// Bottom-left corner
    pub min: Vec2,
    /// Top-right corner
    pub max: Vec2,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min: -ARENA_HALF_EXTENT,
            max: ARENA_HALF_EXTENT,
        }
    }
}

impl ArenaBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` with the given half extent
    pub fn centered(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Bounds pulled inward by `margin` on every side
    ///
    /// A margin wider than the half extent collapses the box (min > max),
    /// after which `contains` rejects every point.
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Check if a point is inside the box (edges inclusive)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Center point of the box
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Width/height of the box
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
