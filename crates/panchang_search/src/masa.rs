//! Hindu month and year derivation.
//!
//! Amant: the month runs new moon to new moon and is named from the Sun's
//! sidereal sign at the ending new moon. When the Sun shows the same sign
//! at both new moons no sankranti fell inside the month, and it is adhik.
//!
//! Purnimant: the Amant result, advanced by one month during Krishna
//! paksha. The interval is the bracketing full moons.

use panchang_base::{
    Era, HinduYear, MonthSystem, Paksha, masa_from_rashi_index, rashi_from_longitude,
};
use panchang_ephem::{Ephemeris, jd_to_calendar};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::{AdhikNaming, AngleSearchConfig};
use crate::error::SearchError;
use crate::lunar_phase::{find_full_moon, find_new_moon};
use crate::lunar_phase_types::{NewMoonCache, SearchDirection};
use crate::panchang::{calculate_tithi, sun_sidereal_longitude_at};
use crate::panchang_types::HinduMonthResult;

/// Sun's sidereal sign index (0 = Mesha) at `jd_tt`.
fn sun_rashi_index<E: Ephemeris>(eph: &E, jd_tt: f64) -> u8 {
    rashi_from_longitude(sun_sidereal_longitude_at(eph, jd_tt)).rashi_index
}

/// Amant (new moon to new moon) month containing `jd_tt`.
pub fn amant_month<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    naming: AdhikNaming,
    config: &AngleSearchConfig,
    cache: Option<&Mutex<NewMoonCache>>,
) -> Result<HinduMonthResult, SearchError> {
    let start_jd = find_new_moon(eph, jd_tt, SearchDirection::Backward, config, cache)?;
    let end_jd = find_new_moon(eph, jd_tt, SearchDirection::Forward, config, cache)?;

    let start_sign = sun_rashi_index(eph, start_jd);
    let end_sign = sun_rashi_index(eph, end_jd);
    let is_adhik_maas = start_sign == end_sign;

    let month = match (is_adhik_maas, naming) {
        (true, AdhikNaming::FollowingMonth) => masa_from_rashi_index(end_sign + 1),
        _ => masa_from_rashi_index(end_sign),
    };
    debug!(
        jd_tt,
        start_sign,
        end_sign,
        month = month.name(),
        is_adhik_maas,
        "amant month"
    );

    Ok(HinduMonthResult {
        month,
        is_adhik_maas,
        start_jd,
        end_jd,
    })
}

/// Purnimant (full moon to full moon) month containing `jd_tt`.
pub fn purnimant_month<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    naming: AdhikNaming,
    config: &AngleSearchConfig,
    cache: Option<&Mutex<NewMoonCache>>,
) -> Result<HinduMonthResult, SearchError> {
    let amant = amant_month(eph, jd_tt, naming, config, cache)?;
    let month = match calculate_tithi(eph, jd_tt).paksha {
        Paksha::Shukla => amant.month,
        Paksha::Krishna => amant.month.next(),
    };
    let start_jd = find_full_moon(eph, jd_tt, SearchDirection::Backward, config)?;
    let end_jd = find_full_moon(eph, jd_tt, SearchDirection::Forward, config)?;
    Ok(HinduMonthResult {
        month,
        is_adhik_maas: amant.is_adhik_maas,
        start_jd,
        end_jd,
    })
}

/// Month containing `jd_tt` under `system`.
pub fn hindu_month<E: Ephemeris>(
    eph: &E,
    jd_tt: f64,
    system: MonthSystem,
    naming: AdhikNaming,
    config: &AngleSearchConfig,
    cache: Option<&Mutex<NewMoonCache>>,
) -> Result<HinduMonthResult, SearchError> {
    match system {
        MonthSystem::Amant => amant_month(eph, jd_tt, naming, config, cache),
        MonthSystem::Purnimant => purnimant_month(eph, jd_tt, naming, config, cache),
    }
}

/// Year in `era` for the moment `jd_tt`, which falls in `month`.
pub fn hindu_year(
    jd_tt: f64,
    month: &HinduMonthResult,
    era: Era,
) -> Result<HinduYear, SearchError> {
    if !jd_tt.is_finite() {
        return Err(SearchError::InvalidInput("jd must be finite"));
    }
    let (gregorian_year, _, _) = jd_to_calendar(jd_tt);
    Ok(HinduYear::new(era, gregorian_year, month.month))
}
