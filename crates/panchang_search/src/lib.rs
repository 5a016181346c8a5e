//! Panchang calculation engine over an injected ephemeris.
//!
//! This crate provides:
//! - A Newton root-finder for elongation, Moon sidereal longitude and
//!   sidereal Sun+Moon sum targets
//! - Tithi, Nakshatra, Yoga and Karana calculators with transition finders
//! - New/full moon search with a bounded new-moon bracket cache
//! - Amant/Purnimant month derivation with adhik detection, and regional years
//! - `PanchangCalculator`, bundling all of the above with time periods

pub mod angle_search;
pub mod calculator;
pub mod config;
pub mod error;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod masa;
pub mod panchang;
pub mod panchang_types;
pub(crate) mod search_util;

pub use angle_search::{
    AngleKind, AngleRoot, find_angle, find_moon_sun_angle, find_sidereal_moon_longitude,
    find_sidereal_sum,
};
pub use calculator::PanchangCalculator;
pub use config::{AdhikNaming, AngleSearchConfig, DEFAULT_CACHE_CAPACITY, PanchangConfig};
pub use error::SearchError;
pub use lunar_phase::{SYNODIC_MONTH_DAYS, find_full_moon, find_lunar_phase, find_new_moon};
pub use lunar_phase_types::{LunarPhase, NewMoonBracket, NewMoonCache, SearchDirection};
pub use masa::{amant_month, hindu_month, hindu_year, purnimant_month};
pub use panchang::{
    calculate_karana, calculate_nakshatra, calculate_tithi, calculate_yoga, elongation_at,
    find_nakshatra_transition, find_tithi_transition, find_yoga_transition,
    moon_sidereal_longitude_at, nakshatra_span, sidereal_sum_at, sun_sidereal_longitude_at,
    tithi_span, yoga_span,
};
pub use panchang_types::{DayContext, ElementSpan, HinduMonthResult, PanchangDay};

pub use parking_lot::Mutex;
