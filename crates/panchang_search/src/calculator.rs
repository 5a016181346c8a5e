//! `PanchangCalculator`: an ephemeris, a config and a private new-moon cache.
//!
//! Each calculator owns its cache, so two calculators never share state.
//! The cache sits behind a mutex and a calculator can be shared across
//! threads when its ephemeris is `Sync`.

use panchang_base::{
    HinduYear, KaranaInfo, NakshatraInfo, Samvatsara, TithiResult, Vaar, YogaInfo,
    all_inauspicious_periods,
};
use panchang_ephem::{Ephemeris, jd_to_calendar, weekday_from_jd};
use parking_lot::Mutex;
use tracing::debug;

use crate::angle_search::AngleRoot;
use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::lunar_phase::{find_full_moon, find_new_moon};
use crate::lunar_phase_types::{NewMoonCache, SearchDirection};
use crate::masa::{hindu_month, hindu_year};
use crate::panchang::{
    calculate_karana, calculate_nakshatra, calculate_tithi, calculate_yoga,
    find_nakshatra_transition, find_tithi_transition, find_yoga_transition, nakshatra_span,
    tithi_span, yoga_span,
};
use crate::panchang_types::{DayContext, ElementSpan, HinduMonthResult, PanchangDay};

#[derive(Debug)]
pub struct PanchangCalculator<E> {
    ephemeris: E,
    config: PanchangConfig,
    cache: Mutex<NewMoonCache>,
}

impl<E: Ephemeris> PanchangCalculator<E> {
    /// Create a calculator after validating `config`.
    pub fn new(ephemeris: E, config: PanchangConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self {
            ephemeris,
            cache: Mutex::new(NewMoonCache::new(config.cache_capacity)),
            config,
        })
    }

    /// Calculator with the default configuration.
    pub fn with_defaults(ephemeris: E) -> Self {
        let config = PanchangConfig::default();
        Self {
            ephemeris,
            cache: Mutex::new(NewMoonCache::new(config.cache_capacity)),
            config,
        }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    /// Number of resident new-moon brackets.
    pub fn cached_brackets(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    pub fn tithi(&self, jd_tt: f64) -> TithiResult {
        calculate_tithi(&self.ephemeris, jd_tt)
    }

    pub fn nakshatra(&self, jd_tt: f64) -> NakshatraInfo {
        calculate_nakshatra(&self.ephemeris, jd_tt)
    }

    pub fn yoga(&self, jd_tt: f64) -> YogaInfo {
        calculate_yoga(&self.ephemeris, jd_tt)
    }

    pub fn karana(&self, jd_tt: f64) -> KaranaInfo {
        calculate_karana(&self.ephemeris, jd_tt)
    }

    pub fn find_tithi_transition(
        &self,
        jd_tt: f64,
        tithi_number: u8,
    ) -> Result<AngleRoot, SearchError> {
        find_tithi_transition(&self.ephemeris, jd_tt, tithi_number, &self.config.search)
    }

    pub fn find_nakshatra_transition(
        &self,
        jd_tt: f64,
        nakshatra_number: u8,
    ) -> Result<AngleRoot, SearchError> {
        find_nakshatra_transition(&self.ephemeris, jd_tt, nakshatra_number, &self.config.search)
    }

    pub fn find_yoga_transition(
        &self,
        jd_tt: f64,
        yoga_number: u8,
    ) -> Result<AngleRoot, SearchError> {
        find_yoga_transition(&self.ephemeris, jd_tt, yoga_number, &self.config.search)
    }

    pub fn tithi_span(&self, jd_tt: f64) -> Result<ElementSpan, SearchError> {
        tithi_span(&self.ephemeris, jd_tt, &self.config.search)
    }

    pub fn nakshatra_span(&self, jd_tt: f64) -> Result<ElementSpan, SearchError> {
        nakshatra_span(&self.ephemeris, jd_tt, &self.config.search)
    }

    pub fn yoga_span(&self, jd_tt: f64) -> Result<ElementSpan, SearchError> {
        yoga_span(&self.ephemeris, jd_tt, &self.config.search)
    }

    /// Nearest new moon in `direction`, through this calculator's cache.
    pub fn new_moon(&self, jd_tt: f64, direction: SearchDirection) -> Result<f64, SearchError> {
        find_new_moon(
            &self.ephemeris,
            jd_tt,
            direction,
            &self.config.search,
            Some(&self.cache),
        )
    }

    /// Nearest full moon in `direction`.
    pub fn full_moon(&self, jd_tt: f64, direction: SearchDirection) -> Result<f64, SearchError> {
        find_full_moon(&self.ephemeris, jd_tt, direction, &self.config.search)
    }

    /// Lunar month containing `jd_tt` under the configured tradition.
    pub fn hindu_month(&self, jd_tt: f64) -> Result<HinduMonthResult, SearchError> {
        hindu_month(
            &self.ephemeris,
            jd_tt,
            self.config.month_system(),
            self.config.adhik_naming,
            &self.config.search,
            Some(&self.cache),
        )
    }

    /// Year in the configured tradition's era.
    pub fn hindu_year(&self, jd_tt: f64) -> Result<HinduYear, SearchError> {
        let month = self.hindu_month(jd_tt)?;
        hindu_year(jd_tt, &month, self.config.tradition.era())
    }

    /// Every panchang element at `jd_tt`. Time periods are filled when
    /// `day` supplies the daylight length and weekday.
    pub fn panchang(
        &self,
        jd_tt: f64,
        day: Option<DayContext>,
    ) -> Result<PanchangDay, SearchError> {
        if !jd_tt.is_finite() {
            return Err(SearchError::InvalidInput("jd must be finite"));
        }
        if let Some(ctx) = &day {
            ctx.validate().map_err(SearchError::InvalidInput)?;
        }

        let tithi_end = self.tithi_span(jd_tt)?.end_jd;
        let nakshatra_end = self.nakshatra_span(jd_tt)?.end_jd;
        let month = self.hindu_month(jd_tt)?;
        let year = hindu_year(jd_tt, &month, self.config.tradition.era())?;
        let (gregorian_year, _, _) = jd_to_calendar(jd_tt);
        let samvatsara = Samvatsara::for_month(gregorian_year, month.month);

        Ok(PanchangDay {
            jd_tt,
            tithi: self.tithi(jd_tt),
            nakshatra: self.nakshatra(jd_tt),
            yoga: self.yoga(jd_tt),
            karana: self.karana(jd_tt),
            month,
            year,
            samvatsara,
            tithi_end_jd: tithi_end,
            nakshatra_end_jd: nakshatra_end,
            periods: day.map(|ctx| all_inauspicious_periods(ctx.daylight_minutes, ctx.vaar)),
        })
    }

    /// Panchang for `days` consecutive days from `start_jd`. With
    /// `daylight_minutes`, each day's weekday comes from its JD.
    pub fn panchang_range(
        &self,
        start_jd: f64,
        days: u32,
        daylight_minutes: Option<f64>,
    ) -> Result<Vec<PanchangDay>, SearchError> {
        let mut out = Vec::with_capacity(days as usize);
        for i in 0..days {
            let jd = start_jd + i as f64;
            let ctx = daylight_minutes
                .map(|minutes| DayContext::new(minutes, Vaar::from_index(weekday_from_jd(jd))));
            out.push(self.panchang(jd, ctx)?);
        }
        debug!(
            start_jd,
            days,
            cached = self.cached_brackets(),
            "panchang range complete"
        );
        Ok(out)
    }
}
