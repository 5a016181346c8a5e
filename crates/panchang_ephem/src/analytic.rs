//! Closed-form Sun and Moon longitudes.
//!
//! Sun: mean elements, equation of centre, aberration and the principal
//! nutation term (Meeus, *Astronomical Algorithms*, ch. 25).
//! Moon: the 60 principal periodic terms in longitude from the ELP-2000/82
//! lunar theory plus the Venus, Jupiter and flattening corrections (ch. 47).
//!
//! Accuracy is roughly 0.01 deg for the Sun and 0.003 deg for the Moon over
//! several centuries around J2000, enough to place tithi and nakshatra
//! boundaries to within a minute or two.

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::ephemeris::Ephemeris;
use crate::julian::jd_to_centuries;

fn norm360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Longitude of the Moon's mean ascending node, degrees.
fn mean_node_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent geocentric longitude of the Sun, degrees in `[0, 360)`.
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = (357.52911 + t * (35999.05029 - t * 0.0001537)).to_radians();
    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = mean_node_deg(t).to_radians();
    norm360(l0 + c - 0.00569 - 0.00478 * omega.sin())
}

/// Periodic terms in lunar longitude: multiples of (D, M, M', F) and the
/// sine coefficient in 1e-6 deg.
#[rustfmt::skip]
const MOON_LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 60] = [
    (0, 0, 1, 0, 6_288_774), (2, 0, -1, 0, 1_274_027), (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618),   (0, 1, 0, 0, -185_116),   (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793),   (2, -1, -1, 0, 57_066),   (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758),   (0, 1, -1, 0, -40_923),   (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383),   (2, 0, 0, -2, 15_327),    (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980),   (4, 0, -1, 0, 10_675),    (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548),    (2, 1, -1, 0, -7_888),    (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163),   (1, 1, 0, 0, 4_987),      (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994),     (4, 0, 0, 0, 3_861),      (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689),   (2, 0, -1, 2, -2_602),    (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348),    (2, -2, 0, 0, 2_236),     (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069),    (2, -2, -1, 0, 2_048),    (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595),    (4, -1, -1, 0, 1_215),    (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892),     (2, 1, 1, 0, -810),       (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713),     (2, 2, -1, 0, -700),      (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596),     (4, 0, 1, 0, 549),        (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520),      (1, 0, -2, 0, -487),      (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381),     (1, 1, 1, 0, 351),        (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330),      (2, -1, 2, 0, 327),       (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299),      (2, 0, 3, 0, 294),        (2, 0, -1, -2, 0),
];

/// Apparent geocentric longitude of the Moon, degrees in `[0, 360)`.
pub fn moon_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    // Eccentricity of Earth's orbit scales terms involving M.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sigma_l: f64 = MOON_LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, coeff)| {
            let arg = cd as f64 * d_r + cm as f64 * m_r + cmp as f64 * mp_r + cf as f64 * f_r;
            let scale = match cm.unsigned_abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            coeff as f64 * scale * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    let omega = mean_node_deg(t).to_radians();
    norm360(lp + sigma_l / 1_000_000.0 - 0.00478 * omega.sin())
}

/// Ephemeris backed by the closed-form Sun and Moon models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris {
    pub ayanamsha: AyanamshaSystem,
}

impl AnalyticEphemeris {
    pub const fn new(ayanamsha: AyanamshaSystem) -> Self {
        Self { ayanamsha }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn sun_tropical_longitude(&self, jd_tt: f64) -> f64 {
        sun_apparent_longitude_deg(jd_tt)
    }

    fn moon_tropical_longitude(&self, jd_tt: f64) -> f64 {
        moon_apparent_longitude_deg(jd_tt)
    }

    fn tropical_to_sidereal(&self, tropical_deg: f64, jd_tt: f64) -> f64 {
        norm360(tropical_deg - ayanamsha_deg(self.ayanamsha, jd_to_centuries(jd_tt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ang_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn sun_meeus_example_25a() {
        // 1992 Oct 13.0 TD: apparent longitude 199.90895 deg
        let lon = sun_apparent_longitude_deg(2_448_908.5);
        assert!(ang_diff(lon, 199.90895) < 0.001, "sun = {lon}");
    }

    #[test]
    fn moon_meeus_example_47a() {
        // 1992 Apr 12.0 TD: apparent longitude 133.167265 deg
        let lon = moon_apparent_longitude_deg(2_448_724.5);
        assert!(ang_diff(lon, 133.167265) < 0.005, "moon = {lon}");
    }

    #[test]
    fn outputs_in_range() {
        let mut jd = 2_415_020.0;
        while jd < 2_488_070.0 {
            let s = sun_apparent_longitude_deg(jd);
            let m = moon_apparent_longitude_deg(jd);
            assert!((0.0..360.0).contains(&s), "sun {s} at {jd}");
            assert!((0.0..360.0).contains(&m), "moon {m} at {jd}");
            jd += 97.3;
        }
    }

    #[test]
    fn sidereal_subtracts_ayanamsha() {
        let eph = AnalyticEphemeris::new(AyanamshaSystem::Lahiri);
        let sid = eph.tropical_to_sidereal(10.0, 2_451_545.0);
        assert!((sid - (360.0 + 10.0 - 23.853)).abs() < 1e-9);
    }

    #[test]
    fn moon_moves_about_thirteen_degrees_a_day() {
        let jd = 2_460_000.5;
        let v = ang_diff(moon_apparent_longitude_deg(jd + 1.0), moon_apparent_longitude_deg(jd));
        assert!((11.0..16.0).contains(&v), "moon daily motion = {v}");
    }
}
