//! Hop direction selection
//!
//! A startled quarry commits to a single direction for the whole hop, picked
//! once at hop start. Planning prefers fleeing straight away from the hunter
//! but takes a sideways or even inward hop over one that would land out of
//! bounds.

use glam::Vec2;

use super::arena::ArenaBounds;

/// Choose a hop direction for a quarry startled by the hunter.
///
/// Candidates are tried in a fixed order: directly away from the hunter, the
/// left perpendicular, the right perpendicular, then directly toward the
/// hunter. The first candidate whose predicted landing point
/// (`quarry_pos + direction * hop_travel`) falls inside `arena` shrunk by
/// `margin` wins. When no candidate lands safely, the zero vector comes back
/// and the quarry hops in place.
///
/// A hunter sitting exactly on the quarry gives a zero away vector; the
/// same stay-put rule applies.
pub fn hop_direction(
    quarry_pos: Vec2,
    hunter_pos: Vec2,
    hop_travel: f32,
    arena: &ArenaBounds,
    margin: f32,
) -> Vec2 {
    let away = (quarry_pos - hunter_pos).normalize_or_zero();
    let left = away.perp();

    let safe = arena.shrink(margin);
    for direction in [away, left, -left, -away] {
        let landing = quarry_pos + direction * hop_travel;
        if safe.contains(landing) {
            return direction;
        }
    }
    Vec2::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_arena() -> ArenaBounds {
        ArenaBounds::new(Vec2::new(-10.0, -10.0), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_prefers_straight_away() {
        let dir = hop_direction(Vec2::new(1.0, 0.0), Vec2::ZERO, 1.3, &open_arena(), 0.5);
        assert_eq!(dir, Vec2::X);
    }

    #[test]
    fn test_away_normalized_for_diagonal_offsets() {
        let dir = hop_direction(Vec2::new(3.0, 4.0), Vec2::ZERO, 1.3, &open_arena(), 0.5);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }

    #[test]
    fn test_wall_behind_forces_sideways() {
        // Quarry pushed against the right wall, hunter to its left: the away
        // landing exits bounds, so the left perpendicular (+y here) wins.
        let arena = ArenaBounds::new(Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0));
        let dir = hop_direction(Vec2::new(4.2, 0.0), Vec2::new(0.0, 0.0), 1.3, &arena, 0.5);
        assert!((dir - Vec2::Y).length() < 1e-5);
    }

    #[test]
    fn test_corner_falls_through_to_right_perpendicular() {
        // Top-right corner: away (+x) and left perp (+y) both exit, right
        // perp (-y) lands safely.
        let arena = ArenaBounds::new(Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0));
        let dir = hop_direction(Vec2::new(4.2, 4.2), Vec2::new(0.0, 4.2), 1.3, &arena, 0.5);
        assert!((dir - Vec2::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn test_away_wins_when_it_is_the_only_safe_landing() {
        // Corridor with the hunter closing from the right: sideways and
        // toward landings all exit, away is the single survivor.
        let arena = ArenaBounds::new(Vec2::new(-5.0, -1.0), Vec2::new(5.0, 1.0));
        let dir = hop_direction(Vec2::new(3.5, 0.0), Vec2::new(6.0, 0.0), 1.3, &arena, 0.5);
        assert_eq!(dir, Vec2::NEG_X);
    }

    #[test]
    fn test_dead_end_hops_back_toward_hunter() {
        // Narrow corridor: away, left, and right all exit; only the hop back
        // toward the hunter stays inside.
        let arena = ArenaBounds::new(Vec2::new(-1.0, -1.0), Vec2::new(4.0, 1.0));
        let dir = hop_direction(Vec2::new(3.0, 0.0), Vec2::new(0.0, 0.0), 1.3, &arena, 0.5);
        assert_eq!(dir, Vec2::NEG_X);
    }

    #[test]
    fn test_no_safe_landing_stays_put() {
        // Arena smaller than the hop travel in every direction
        let arena = ArenaBounds::new(Vec2::new(-0.6, -0.6), Vec2::new(0.6, 0.6));
        let dir = hop_direction(Vec2::ZERO, Vec2::new(0.1, 0.0), 1.3, &arena, 0.5);
        assert_eq!(dir, Vec2::ZERO);
    }

    #[test]
    fn test_coincident_hunter_stays_put() {
        let dir = hop_direction(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), 1.3, &open_arena(), 0.5);
        assert_eq!(dir, Vec2::ZERO);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_result_is_zero_or_unit(
                qx in -8.0f32..8.0, qy in -8.0f32..8.0,
                hx in -8.0f32..8.0, hy in -8.0f32..8.0,
                travel in 0.1f32..4.0,
                margin in 0.0f32..2.0,
            ) {
                let arena = ArenaBounds::new(Vec2::new(-8.0, -8.0), Vec2::new(8.0, 8.0));
                let dir = hop_direction(
                    Vec2::new(qx, qy),
                    Vec2::new(hx, hy),
                    travel,
                    &arena,
                    margin,
                );
                let len = dir.length();
                prop_assert!(len < 1e-6 || (len - 1.0).abs() < 1e-5);
            }

            #[test]
            fn prop_nonzero_result_lands_inside_margin(
                qx in -8.0f32..8.0, qy in -8.0f32..8.0,
                hx in -8.0f32..8.0, hy in -8.0f32..8.0,
                travel in 0.1f32..4.0,
                margin in 0.0f32..2.0,
            ) {
                let arena = ArenaBounds::new(Vec2::new(-8.0, -8.0), Vec2::new(8.0, 8.0));
                let quarry = Vec2::new(qx, qy);
                let dir = hop_direction(quarry, Vec2::new(hx, hy), travel, &arena, margin);
                if dir != Vec2::ZERO {
                    prop_assert!(arena.shrink(margin).contains(quarry + dir * travel));
                }
            }

            #[test]
            fn prop_away_wins_when_it_lands_safely(
                qx in -3.0f32..3.0, qy in -3.0f32..3.0,
                hx in -3.0f32..3.0, hy in -3.0f32..3.0,
                travel in 0.1f32..2.0,
            ) {
                // Arena big enough that every candidate from the inner region
                // lands safely, so priority alone decides.
                let arena = ArenaBounds::new(Vec2::new(-20.0, -20.0), Vec2::new(20.0, 20.0));
                let quarry = Vec2::new(qx, qy);
                let hunter = Vec2::new(hx, hy);
                prop_assume!(quarry.distance(hunter) > 1e-3);

                let dir = hop_direction(quarry, hunter, travel, &arena, 0.5);
                let away = (quarry - hunter).normalize();
                prop_assert!((dir - away).length() < 1e-5);
            }
        }
    }
}
