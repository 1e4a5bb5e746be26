//! Angle wrapping for reported angles and spring deflection.
use std::f64::consts::{PI, TAU};

/// Wrap an angle in radians into `(-π, π]`.
///
/// Shifts by whole turns until the value lands in range. Non-finite input is
/// returned as is.
pub fn normalize_rad(a: f64) -> f64 {
    wrap(a, PI, TAU)
}

/// Wrap an angle in degrees into `(-180, 180]`.
pub fn normalize_deg(a: f64) -> f64 {
    wrap(a, 180., 360.)
}

fn wrap(mut a: f64, half: f64, full: f64) -> f64 {
    if !a.is_finite() {
        return a;
    }
    // Jump close to the range first, large inputs would loop for a long time
    if a.abs() > 4. * full {
        a -= (a / full).trunc() * full;
    }
    while a > half {
        a -= full;
    }
    while a <= -half {
        a += full;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn range() {
        assert_eq!(normalize_deg(180.), 180.);
        assert_eq!(normalize_deg(-180.), 180.);
        assert_eq!(normalize_deg(540.), 180.);
        assert_eq!(normalize_deg(-90.), -90.);
        assert_eq!(normalize_rad(PI), PI);
        assert_eq!(normalize_rad(-PI), PI);
        assert_abs_diff_eq!(normalize_rad(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn idempotent() {
        for i in -359..=360 {
            let a = i as f64 * 0.5;
            let n = normalize_deg(a);
            assert!(n > -180. && n <= 180.);
            assert_eq!(normalize_deg(n), n);
        }
    }

    #[test]
    fn whole_turns() {
        for a in [-179.5, -37.25, 0., 12.5, 90., 179.75] {
            for k in -5..=5 {
                let shifted = a + 360. * k as f64;
                assert_abs_diff_eq!(normalize_deg(shifted), a, epsilon = 1e-9);
            }
        }
        assert_abs_diff_eq!(normalize_deg(1e6 + 30.), normalize_deg(1e6 + 30. - 360.), epsilon = 1e-6);
    }

    #[test]
    fn non_finite() {
        assert!(normalize_rad(f64::NAN).is_nan());
        assert_eq!(normalize_deg(f64::INFINITY), f64::INFINITY);
    }
}
