//! New and full moon search.
//!
//! A phase-fraction estimate seeds the Newton root-finder one day beyond
//! the expected event, and the result is checked against the requested
//! side of the query. One retry shifted by a synodic month is allowed.
//!
//! Only new-moon searches consult and fill the bracket cache; full-moon
//! searches always run the root-finder.

use panchang_ephem::Ephemeris;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::angle_search::find_moon_sun_angle;
use crate::config::AngleSearchConfig;
use crate::error::SearchError;
use crate::lunar_phase_types::{LunarPhase, NewMoonBracket, NewMoonCache, SearchDirection};
use crate::panchang::elongation_at;

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588;

/// Slack allowed when checking that a root lies on the requested side.
const SIDE_TOLERANCE_DAYS: f64 = 0.5;

/// Nearest new moon in `direction` from `jd_tt`.
///
/// With a cache, a query inside a cached bracket is answered without
/// touching the ephemeris. A backward miss also finds the following new
/// moon and records the bracket.
pub fn find_new_moon<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    direction: SearchDirection,
    config: &AngleSearchConfig,
    cache: Option<&Mutex<NewMoonCache>>,
) -> Result<f64, SearchError> {
    if let Some(cache) = cache {
        if let Some(bracket) = cache.lock().lookup(jd_tt) {
            debug!(jd_tt, ?direction, "new moon cache hit");
            return Ok(bracket.bound(direction));
        }
        debug!(jd_tt, ?direction, "new moon cache miss");
    }

    let found = search_phase(eph, jd_tt, LunarPhase::NewMoon, direction, config)?;

    if let (Some(cache), SearchDirection::Backward) = (cache, direction) {
        let forward = find_moon_sun_angle(eph, found + SYNODIC_MONTH_DAYS - 2.0, 0.0, config)?;
        let bracket = NewMoonBracket {
            query_jd: jd_tt,
            backward_jd: found,
            forward_jd: forward.jd_tt,
        };
        if let Some(evicted) = cache.lock().insert(bracket) {
            debug!(
                backward_jd = evicted.backward_jd,
                forward_jd = evicted.forward_jd,
                "new moon cache evicted oldest bracket"
            );
        }
    }

    Ok(found)
}

/// Nearest full moon in `direction` from `jd_tt`. Never cached.
pub fn find_full_moon<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    direction: SearchDirection,
    config: &AngleSearchConfig,
) -> Result<f64, SearchError> {
    search_phase(eph, jd_tt, LunarPhase::FullMoon, direction, config)
}

/// Nearest `phase` in `direction`, dispatching to the new/full moon search.
pub fn find_lunar_phase<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    phase: LunarPhase,
    direction: SearchDirection,
    config: &AngleSearchConfig,
    cache: Option<&Mutex<NewMoonCache>>,
) -> Result<f64, SearchError> {
    match phase {
        LunarPhase::NewMoon => find_new_moon(eph, jd_tt, direction, config, cache),
        LunarPhase::FullMoon => find_full_moon(eph, jd_tt, direction, config),
    }
}

fn search_phase<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    phase: LunarPhase,
    direction: SearchDirection,
    config: &AngleSearchConfig,
) -> Result<f64, SearchError> {
    if !jd_tt.is_finite() {
        return Err(SearchError::InvalidInput("jd must be finite"));
    }
    let target = phase.target_elongation_deg();

    // Days since the phase last occurred, assuming mean motion.
    let since = (elongation_at(eph, jd_tt) - target).rem_euclid(360.0) / 360.0 * SYNODIC_MONTH_DAYS;
    let seed = match direction {
        SearchDirection::Backward => jd_tt - since - 1.0,
        SearchDirection::Forward => jd_tt + SYNODIC_MONTH_DAYS - since + 1.0,
    };

    let on_side = |jd: f64| match direction {
        SearchDirection::Backward => jd <= jd_tt + SIDE_TOLERANCE_DAYS,
        SearchDirection::Forward => jd >= jd_tt - SIDE_TOLERANCE_DAYS,
    };

    let root = find_moon_sun_angle(eph, seed, target, config)?.jd_tt;
    if on_side(root) {
        return Ok(root);
    }

    let retry_seed = match direction {
        SearchDirection::Backward => seed - SYNODIC_MONTH_DAYS,
        SearchDirection::Forward => seed + SYNODIC_MONTH_DAYS,
    };
    warn!(
        phase = phase.name(),
        ?direction,
        jd_tt,
        root,
        retry_seed,
        "phase root on wrong side of query, retrying"
    );
    let root = find_moon_sun_angle(eph, retry_seed, target, config)?.jd_tt;
    if on_side(root) {
        Ok(root)
    } else {
        Err(SearchError::PhaseNotFound { phase, direction })
    }
}
