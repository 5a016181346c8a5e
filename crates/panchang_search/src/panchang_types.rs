//! Types for panchang results.

use panchang_base::{
    HinduYear, KaranaInfo, Masa, NakshatraInfo, Samvatsara, TimePeriod, TithiResult, Vaar,
    YogaInfo,
};

/// Interval occupied by one panchang element, `[start_jd, end_jd)` in JD TT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSpan {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl ElementSpan {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Lunar month classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HinduMonthResult {
    pub month: Masa,
    /// Intercalary month: no solar sign change between the bracketing new moons.
    pub is_adhik_maas: bool,
    /// Month start (new moon for Amant, full moon for Purnimant), JD TT.
    pub start_jd: f64,
    /// Month end, JD TT.
    pub end_jd: f64,
}

/// Daylight information for the time-period calculators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayContext {
    /// Sunrise to sunset, minutes.
    pub daylight_minutes: f64,
    pub vaar: Vaar,
}

impl DayContext {
    pub fn new(daylight_minutes: f64, vaar: Vaar) -> Self {
        Self {
            daylight_minutes,
            vaar,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.daylight_minutes.is_finite()
            || self.daylight_minutes <= 0.0
            || self.daylight_minutes > 1440.0
        {
            return Err("daylight_minutes must be in (0, 1440]");
        }
        Ok(())
    }
}

/// All panchang elements for one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangDay {
    /// Moment the elements were evaluated at, JD TT.
    pub jd_tt: f64,
    pub tithi: TithiResult,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub month: HinduMonthResult,
    pub year: HinduYear,
    pub samvatsara: Samvatsara,
    /// When the current tithi ends, JD TT.
    pub tithi_end_jd: f64,
    /// When the current nakshatra ends, JD TT.
    pub nakshatra_end_jd: f64,
    /// Rahu Kaal, Yamaghanda and Gulika Kaal, when daylight was supplied.
    pub periods: Option<[TimePeriod; 3]>,
}
