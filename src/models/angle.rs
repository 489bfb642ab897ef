//! Free helper functions for working with directions on the unit circle.
//! All angles are radians; normalized values live in `[0, 2π)`.

use std::f64::consts::{PI, TAU};

use crate::models::FloatType;

/// Map an angle into `[0, 2π)`.
pub fn normalize(angle: FloatType) -> FloatType {
    angle.rem_euclid(TAU)
}

/// Signed shortest rotation taking `from` to `to`, in `(-π, π]`.
/// Positive means counter-clockwise.
pub fn shortest_distance(from: FloatType, to: FloatType) -> FloatType {
    let delta = normalize(to - from);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FloatCompare;

    #[test]
    fn normalize_wraps_into_full_turn() {
        assert!(normalize(0.0).approx_eq(0.0));
        assert!(normalize(TAU).approx_eq(0.0));
        assert!(normalize(-PI * 0.5).approx_eq(PI * 1.5));
        assert!(normalize(TAU * 3.0 + 1.0).approx_eq(1.0));
        assert!(normalize(-TAU * 2.0 - 0.25).approx_eq(TAU - 0.25));
    }

    #[test]
    fn shortest_distance_signs() {
        // 350 degrees to 10 degrees is +20 degrees, not -340.
        let d = shortest_distance(350f64.to_radians(), 10f64.to_radians());
        assert!(d.approx_eq(20f64.to_radians()));

        // The reverse path is clockwise.
        let d = shortest_distance(10f64.to_radians(), 350f64.to_radians());
        assert!(d.approx_eq(-20f64.to_radians()));
    }

    #[test]
    fn shortest_distance_half_turn_is_positive() {
        // Exactly opposite directions resolve to +PI, never -PI.
        let d = shortest_distance(0.0, PI);
        assert!(d.approx_eq(PI));
        let d = shortest_distance(PI * 0.5, PI * 1.5);
        assert!(d.approx_eq(PI));
    }

    #[test]
    fn shortest_distance_identity() {
        assert!(shortest_distance(1.25, 1.25).approx_eq(0.0));
        assert!(shortest_distance(1.25, 1.25 + TAU).approx_eq(0.0));
    }
}
