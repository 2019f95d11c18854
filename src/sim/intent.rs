//! Pointer-to-steering mapping
//!
//! Every tick the hunter derives a requested bearing and speed band from the
//! pointer's offset, regardless of which state it is in. The offset runs from
//! the pointer to the hunter, so the facing it produces points away from the
//! pointer and forward motion runs toward it.

use glam::Vec2;

use crate::normalize_degrees;
use crate::tuning::HunterTuning;

/// Pointer-derived steering request for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerIntent {
    /// Requested facing: bearing from pointer to hunter (degrees)
    pub target_angle: f32,
    /// Pointer offset length normalized by the screen extent length
    pub magnitude: f32,
    /// Requested speed band for this magnitude
    pub target_speed: f32,
}

/// Map the pointer offset to a steering request.
///
/// `screen_extent` is the world position of the screen's top-right corner;
/// its length normalizes the offset so the speed bands hold across window
/// sizes. A coincident pointer yields angle 0 and magnitude 0.
pub fn pointer_intent(
    hunter_pos: Vec2,
    pointer_world: Vec2,
    screen_extent: Vec2,
    tuning: &HunterTuning,
) -> PointerIntent {
    let offset = hunter_pos - pointer_world;
    let target_angle = normalize_degrees(offset.y.atan2(offset.x).to_degrees());
    let magnitude = offset.length() / screen_extent.length().max(1e-4);

    let target_speed = if magnitude > tuning.magnitude_fast {
        tuning.max_speed
    } else if magnitude > tuning.magnitude_slow {
        tuning.slow_speed
    } else {
        0.0
    };

    PointerIntent {
        target_angle,
        magnitude,
        target_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing_to_vec;

    fn tuning() -> HunterTuning {
        HunterTuning::default()
    }

    #[test]
    fn test_pointer_right_of_hunter_faces_left() {
        // Pointer at +x: offset points to -x, so the requested facing is
        // ±180° and forward (the negated facing) runs toward the pointer.
        let intent = pointer_intent(
            Vec2::ZERO,
            Vec2::new(3.0, 0.0),
            Vec2::new(8.9, 5.0),
            &tuning(),
        );
        assert!((intent.target_angle.abs() - 180.0).abs() < 1e-4);
        let forward = -bearing_to_vec(intent.target_angle);
        assert!((forward - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn test_pointer_above_hunter_faces_down() {
        let intent = pointer_intent(
            Vec2::ZERO,
            Vec2::new(0.0, 2.0),
            Vec2::new(8.9, 5.0),
            &tuning(),
        );
        assert!((intent.target_angle - (-90.0)).abs() < 1e-4);
    }

    #[test]
    fn test_magnitude_normalizes_by_screen_extent() {
        let extent = Vec2::new(3.0, 4.0); // length 5
        let intent = pointer_intent(Vec2::new(2.5, 0.0), Vec2::ZERO, extent, &tuning());
        assert!((intent.magnitude - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_speed_bands() {
        let t = tuning();
        let extent = Vec2::new(6.0, 8.0); // length 10

        // magnitude 0.7 > magnitude_fast
        let fast = pointer_intent(Vec2::new(7.0, 0.0), Vec2::ZERO, extent, &t);
        assert_eq!(fast.target_speed, t.max_speed);

        // magnitude 0.3 between the bands
        let slow = pointer_intent(Vec2::new(3.0, 0.0), Vec2::ZERO, extent, &t);
        assert_eq!(slow.target_speed, t.slow_speed);

        // magnitude 0.03 below magnitude_slow
        let stop = pointer_intent(Vec2::new(0.3, 0.0), Vec2::ZERO, extent, &t);
        assert_eq!(stop.target_speed, 0.0);
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        let t = tuning();
        // Unit-length extent keeps the boundary magnitudes exact
        let extent = Vec2::X;

        // Exactly at magnitude_fast stays in the slow band
        let at_fast = pointer_intent(Vec2::new(t.magnitude_fast, 0.0), Vec2::ZERO, extent, &t);
        assert_eq!(at_fast.target_speed, t.slow_speed);

        // Exactly at magnitude_slow stays stopped
        let at_slow = pointer_intent(Vec2::new(t.magnitude_slow, 0.0), Vec2::ZERO, extent, &t);
        assert_eq!(at_slow.target_speed, 0.0);
    }

    #[test]
    fn test_coincident_pointer_is_calm() {
        let intent = pointer_intent(Vec2::ZERO, Vec2::ZERO, Vec2::new(8.9, 5.0), &tuning());
        assert_eq!(intent.target_angle, 0.0);
        assert_eq!(intent.magnitude, 0.0);
        assert_eq!(intent.target_speed, 0.0);
    }
}
