//! Newton root-finder for "angle reaches target" events.
//!
//! The searched quantities (Moon-Sun elongation, Moon sidereal longitude,
//! sidereal Sun+Moon sum) are periodic in `[0, 360)`. Every error term is
//! wrapped into `[-180, 180)` so each step moves along the shorter arc and
//! the iteration converges on the root nearest the seed.

use panchang_ephem::Ephemeris;
use tracing::{trace, warn};

use crate::config::AngleSearchConfig;
use crate::error::SearchError;
use crate::panchang::{elongation_at, moon_sidereal_longitude_at, sidereal_sum_at};
use crate::search_util::normalize_to_pm180;

/// The angular quantity a search drives to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleKind {
    /// `(Moon - Sun) mod 360`, tropical (ayanamsha cancels).
    Elongation,
    /// Moon sidereal longitude.
    MoonSidereal,
    /// `(Moon_sid + Sun_sid) mod 360`.
    SiderealSum,
}

impl AngleKind {
    /// Mean rate of the quantity, substituted when the finite-difference
    /// estimate is too small to step with.
    pub const fn fallback_velocity_deg_per_day(self) -> f64 {
        match self {
            Self::Elongation => 12.2,
            Self::MoonSidereal => 13.2,
            Self::SiderealSum => 14.2,
        }
    }

    /// Current value of the quantity at `jd_tt`, degrees in `[0, 360)`.
    pub fn angle_at<E: Ephemeris>(self, eph: &E, jd_tt: f64) -> f64 {
        match self {
            Self::Elongation => elongation_at(eph, jd_tt),
            Self::MoonSidereal => moon_sidereal_longitude_at(eph, jd_tt),
            Self::SiderealSum => sidereal_sum_at(eph, jd_tt),
        }
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRoot {
    /// Time at which the target is reached, JD TT.
    pub jd_tt: f64,
    /// Convergence checks performed, including the successful one.
    pub iterations: u32,
    /// Signed angular error at `jd_tt`, degrees.
    pub residual_deg: f64,
}

/// Find the JD nearest `jd_start` at which `kind` equals `target_deg`.
pub fn find_angle<E: Ephemeris>(
    eph: &E,
    kind: AngleKind,
    jd_start: f64,
    target_deg: f64,
    config: &AngleSearchConfig,
) -> Result<AngleRoot, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd_start.is_finite() {
        return Err(SearchError::InvalidInput("jd must be finite"));
    }
    if !(0.0..360.0).contains(&target_deg) {
        return Err(SearchError::InvalidInput("target angle must be in [0, 360)"));
    }

    let h = config.velocity_step_days;
    let mut jd = jd_start;

    for i in 0..config.max_iterations {
        let current = kind.angle_at(eph, jd);
        let err = normalize_to_pm180(target_deg - current);
        trace!(?kind, iteration = i + 1, jd, err, "angle search step");
        if err.abs() < config.tolerance_deg {
            return Ok(AngleRoot {
                jd_tt: jd,
                iterations: i + 1,
                residual_deg: err,
            });
        }

        let mut velocity = normalize_to_pm180(kind.angle_at(eph, jd + h) - current) / h;
        if velocity.abs() < config.min_velocity_deg_per_day {
            velocity = kind.fallback_velocity_deg_per_day();
        }
        jd += err / velocity;
    }

    let residual_deg = normalize_to_pm180(target_deg - kind.angle_at(eph, jd));
    warn!(
        ?kind,
        target_deg,
        last_jd = jd,
        residual_deg,
        "angle search did not converge"
    );
    Err(SearchError::NoConvergence {
        last_jd: jd,
        iterations: config.max_iterations,
        residual_deg,
    })
}

/// Find when the Moon-Sun elongation reaches `target_deg`.
pub fn find_moon_sun_angle<E: Ephemeris>(
    eph: &E,
    jd_start: f64,
    target_deg: f64,
    config: &AngleSearchConfig,
) -> Result<AngleRoot, SearchError> {
    find_angle(eph, AngleKind::Elongation, jd_start, target_deg, config)
}

/// Find when the Moon's sidereal longitude reaches `target_deg`.
pub fn find_sidereal_moon_longitude<E: Ephemeris>(
    eph: &E,
    jd_start: f64,
    target_deg: f64,
    config: &AngleSearchConfig,
) -> Result<AngleRoot, SearchError> {
    find_angle(eph, AngleKind::MoonSidereal, jd_start, target_deg, config)
}

/// Find when the sidereal Sun+Moon sum reaches `target_deg`.
pub fn find_sidereal_sum<E: Ephemeris>(
    eph: &E,
    jd_start: f64,
    target_deg: f64,
    config: &AngleSearchConfig,
) -> Result<AngleRoot, SearchError> {
    find_angle(eph, AngleKind::SiderealSum, jd_start, target_deg, config)
}
