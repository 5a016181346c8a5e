//! Panchang element calculators: Tithi, Nakshatra, Yoga and Karana.
//!
//! The classifiers are pure functions of the current angles. Transition
//! finders drive the Newton root-finder to a segment's starting angle.

use panchang_base::{
    KaranaInfo, NAKSHATRA_SPAN_27, NakshatraInfo, TITHI_COUNT, TITHI_SEGMENT_DEG, TithiResult,
    YOGA_SEGMENT_DEG, YogaInfo, karana_from_elongation, nakshatra_from_longitude,
    normalize_360, tithi_from_elongation, yoga_from_sum,
};
use panchang_ephem::Ephemeris;

use crate::angle_search::{
    AngleRoot, find_moon_sun_angle, find_sidereal_moon_longitude, find_sidereal_sum,
};
use crate::config::AngleSearchConfig;
use crate::error::SearchError;
use crate::panchang_types::ElementSpan;

/// Moon-Sun elongation at `jd_tt`, degrees in `[0, 360)`.
///
/// Tropical longitudes suffice: the ayanamsha cancels in the difference.
pub fn elongation_at<E: Ephemeris>(eph: &E, jd_tt: f64) -> f64 {
    normalize_360(eph.moon_tropical_longitude(jd_tt) - eph.sun_tropical_longitude(jd_tt))
}

/// Moon sidereal longitude at `jd_tt`.
pub fn moon_sidereal_longitude_at<E: Ephemeris>(eph: &E, jd_tt: f64) -> f64 {
    normalize_360(eph.tropical_to_sidereal(eph.moon_tropical_longitude(jd_tt), jd_tt))
}

/// Sun sidereal longitude at `jd_tt`.
pub fn sun_sidereal_longitude_at<E: Ephemeris>(eph: &E, jd_tt: f64) -> f64 {
    normalize_360(eph.tropical_to_sidereal(eph.sun_tropical_longitude(jd_tt), jd_tt))
}

/// `(Moon_sid + Sun_sid) mod 360` at `jd_tt`. The ayanamsha does not cancel.
pub fn sidereal_sum_at<E: Ephemeris>(eph: &E, jd_tt: f64) -> f64 {
    normalize_360(moon_sidereal_longitude_at(eph, jd_tt) + sun_sidereal_longitude_at(eph, jd_tt))
}

pub fn calculate_tithi<E: Ephemeris>(eph: &E, jd_tt: f64) -> TithiResult {
    tithi_from_elongation(elongation_at(eph, jd_tt))
}

pub fn calculate_nakshatra<E: Ephemeris>(eph: &E, jd_tt: f64) -> NakshatraInfo {
    nakshatra_from_longitude(moon_sidereal_longitude_at(eph, jd_tt))
}

pub fn calculate_yoga<E: Ephemeris>(eph: &E, jd_tt: f64) -> YogaInfo {
    yoga_from_sum(sidereal_sum_at(eph, jd_tt))
}

pub fn calculate_karana<E: Ephemeris>(eph: &E, jd_tt: f64) -> KaranaInfo {
    karana_from_elongation(elongation_at(eph, jd_tt))
}

/// Find the start of tithi `tithi_number` (1..=30) nearest `jd_start`.
pub fn find_tithi_transition<E: Ephemeris>(
    eph: &E,
    jd_start: f64,
    tithi_number: u8,
    config: &AngleSearchConfig,
) -> Result<AngleRoot, SearchError> {
    if !(1..=TITHI_COUNT).contains(&tithi_number) {
        return Err(SearchError::InvalidInput("tithi number must be in 1..=30"));
    }
    let target = (tithi_number - 1) as f64 * TITHI_SEGMENT_DEG;
    find_moon_sun_angle(eph, jd_start, target, config)
}

/// Find the start of nakshatra `nakshatra_number` (1..=27) nearest `jd_start`.
pub fn find_nakshatra_transition<E: Ephemeris>(
    eph: &E,
    jd_start: f64,
    nakshatra_number: u8,
    config: &AngleSearchConfig,
) -> Result<AngleRoot, SearchError> {
    if !(1..=27).contains(&nakshatra_number) {
        return Err(SearchError::InvalidInput("nakshatra number must be in 1..=27"));
    }
    let target = (nakshatra_number - 1) as f64 * NAKSHATRA_SPAN_27;
    find_sidereal_moon_longitude(eph, jd_start, target, config)
}

/// Find the start of yoga `yoga_number` (1..=27) nearest `jd_start`.
pub fn find_yoga_transition<E: Ephemeris>(
    eph: &E,
    jd_start: f64,
    yoga_number: u8,
    config: &AngleSearchConfig,
) -> Result<AngleRoot, SearchError> {
    if !(1..=27).contains(&yoga_number) {
        return Err(SearchError::InvalidInput("yoga number must be in 1..=27"));
    }
    let target = (yoga_number - 1) as f64 * YOGA_SEGMENT_DEG;
    find_sidereal_sum(eph, jd_start, target, config)
}

/// Start and end of the tithi containing `jd_tt`.
pub fn tithi_span<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    config: &AngleSearchConfig,
) -> Result<ElementSpan, SearchError> {
    let current = calculate_tithi(eph, jd_tt).number;
    let next = current % TITHI_COUNT + 1;
    let start = find_tithi_transition(eph, jd_tt, current, config)?;
    let end = find_tithi_transition(eph, jd_tt, next, config)?;
    Ok(ElementSpan {
        start_jd: start.jd_tt,
        end_jd: end.jd_tt,
    })
}

/// Start and end of the nakshatra containing `jd_tt`.
pub fn nakshatra_span<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    config: &AngleSearchConfig,
) -> Result<ElementSpan, SearchError> {
    let current = calculate_nakshatra(eph, jd_tt).nakshatra_index + 1;
    let next = current % 27 + 1;
    let start = find_nakshatra_transition(eph, jd_tt, current, config)?;
    let end = find_nakshatra_transition(eph, jd_tt, next, config)?;
    Ok(ElementSpan {
        start_jd: start.jd_tt,
        end_jd: end.jd_tt,
    })
}

/// Start and end of the yoga containing `jd_tt`.
pub fn yoga_span<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    config: &AngleSearchConfig,
) -> Result<ElementSpan, SearchError> {
    let current = calculate_yoga(eph, jd_tt).yoga_index + 1;
    let next = current % 27 + 1;
    let start = find_yoga_transition(eph, jd_tt, current, config)?;
    let end = find_yoga_transition(eph, jd_tt, next, config)?;
    Ok(ElementSpan {
        start_jd: start.jd_tt,
        end_jd: end.jd_tt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_base::{Karana, Nakshatra, Paksha, Tithi, Yoga};

    /// Sun fixed in tropical longitude; Moon at `moon`; ayanamsha 24.
    struct Snapshot {
        sun: f64,
        moon: f64,
    }

    impl Ephemeris for Snapshot {
        fn sun_tropical_longitude(&self, _jd: f64) -> f64 {
            self.sun
        }
        fn moon_tropical_longitude(&self, _jd: f64) -> f64 {
            self.moon
        }
        fn tropical_to_sidereal(&self, tropical_deg: f64, _jd: f64) -> f64 {
            (tropical_deg - 24.0).rem_euclid(360.0)
        }
    }

    /// Moon moving 12 deg/day ahead of a fixed Sun, no ayanamsha.
    struct Linear;

    impl Ephemeris for Linear {
        fn sun_tropical_longitude(&self, _jd: f64) -> f64 {
            0.0
        }
        fn moon_tropical_longitude(&self, jd: f64) -> f64 {
            (12.0 * jd).rem_euclid(360.0)
        }
        fn tropical_to_sidereal(&self, tropical_deg: f64, _jd: f64) -> f64 {
            tropical_deg
        }
    }

    #[test]
    fn elongation_wraps() {
        let eph = Snapshot {
            sun: 350.0,
            moon: 10.0,
        };
        assert!((elongation_at(&eph, 0.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn tithi_from_snapshot() {
        let eph = Snapshot {
            sun: 100.0,
            moon: 280.0,
        };
        let t = calculate_tithi(&eph, 0.0);
        // elongation exactly 180 starts tithi 16
        assert_eq!(t.number, 16);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi, Tithi::Pratipada);
    }

    #[test]
    fn nakshatra_is_sidereal() {
        let eph = Snapshot {
            sun: 0.0,
            moon: 24.0 + 13.5,
        };
        let n = calculate_nakshatra(&eph, 0.0);
        assert_eq!(n.nakshatra, Nakshatra::Bharani);
    }

    #[test]
    fn yoga_uses_sidereal_sum() {
        // sun_sid 6, moon_sid 10: sum 16 -> Priti (second yoga)
        let eph = Snapshot {
            sun: 30.0,
            moon: 34.0,
        };
        assert_eq!(calculate_yoga(&eph, 0.0).yoga, Yoga::Priti);
    }

    #[test]
    fn karana_second_half_of_first_tithi() {
        let eph = Snapshot { sun: 0.0, moon: 7.0 };
        assert_eq!(calculate_karana(&eph, 0.0).karana, Karana::Bava);
    }

    #[test]
    fn transition_targets() {
        let cfg = AngleSearchConfig::default();
        let root = find_tithi_transition(&Linear, 0.5, 3, &cfg).unwrap();
        assert!((root.jd_tt - 2.0).abs() < 1e-5);
        let root = find_nakshatra_transition(&Linear, 0.5, 2, &cfg).unwrap();
        assert!((root.jd_tt - NAKSHATRA_SPAN_27 / 12.0).abs() < 1e-5);
    }

    #[test]
    fn yoga_transition_and_span() {
        // With no Sun motion and no ayanamsha the sidereal sum is 12 * jd.
        let cfg = AngleSearchConfig::default();
        let root = find_yoga_transition(&Linear, 1.0, 3, &cfg).unwrap();
        assert!((root.jd_tt - 2.0 * YOGA_SEGMENT_DEG / 12.0).abs() < 1e-5);
        assert!(root.residual_deg.abs() < cfg.tolerance_deg);

        let span = yoga_span(&Linear, 4.3, &cfg).unwrap();
        assert!((span.start_jd - 3.0 * YOGA_SEGMENT_DEG / 12.0).abs() < 1e-5);
        assert!((span.end_jd - 4.0 * YOGA_SEGMENT_DEG / 12.0).abs() < 1e-5);
        assert!(span.contains(4.3));
        assert_eq!(calculate_yoga(&Linear, 4.3).yoga, Yoga::Saubhagya);
    }

    #[test]
    fn transition_numbers_validated() {
        let cfg = AngleSearchConfig::default();
        assert!(matches!(
            find_tithi_transition(&Linear, 0.0, 0, &cfg),
            Err(SearchError::InvalidInput(_))
        ));
        assert!(matches!(
            find_tithi_transition(&Linear, 0.0, 31, &cfg),
            Err(SearchError::InvalidInput(_))
        ));
        assert!(matches!(
            find_nakshatra_transition(&Linear, 0.0, 28, &cfg),
            Err(SearchError::InvalidInput(_))
        ));
        assert!(matches!(
            find_yoga_transition(&Linear, 0.0, 0, &cfg),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn tithi_span_brackets_query() {
        let span = tithi_span(&Linear, 4.3, &AngleSearchConfig::default()).unwrap();
        assert!((span.start_jd - 4.0).abs() < 1e-5);
        assert!((span.end_jd - 5.0).abs() < 1e-5);
        assert!(span.contains(4.3));
    }

    #[test]
    fn last_tithi_span_wraps_to_first() {
        let span = tithi_span(&Linear, 29.5, &AngleSearchConfig::default()).unwrap();
        assert!((span.start_jd - 29.0).abs() < 1e-5);
        assert!((span.end_jd - 30.0).abs() < 1e-5);
    }
}
