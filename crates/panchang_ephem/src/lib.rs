//! Ephemeris seam for panchang calculations.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait: tropical Sun/Moon longitudes and the
//!   tropical-to-sidereal conversion
//! - Ayanamsha for a subset of published sidereal systems
//! - Julian Date <-> calendar conversions
//! - [`AnalyticEphemeris`], a closed-form Sun/Moon model good to ~0.01 deg

pub mod analytic;
pub mod ayanamsha;
pub mod ephemeris;
pub mod julian;

pub use analytic::{AnalyticEphemeris, moon_apparent_longitude_deg, sun_apparent_longitude_deg};
pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, general_precession_longitude_deg};
pub use ephemeris::Ephemeris;
pub use julian::{
    J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries, weekday_from_jd,
};
