//! Angle helpers shared by the search routines.

/// Wrap an angle difference into `[-180, 180)`.
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let r = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if r >= 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert!((normalize_to_pm180(350.0) - (-10.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(-350.0) - 10.0).abs() < 1e-12);
        assert!((normalize_to_pm180(190.0) - (-170.0)).abs() < 1e-12);
        assert_eq!(normalize_to_pm180(0.0), 0.0);
    }

    #[test]
    fn half_turn_is_negative() {
        assert_eq!(normalize_to_pm180(180.0), -180.0);
        assert_eq!(normalize_to_pm180(-180.0), -180.0);
    }
}
