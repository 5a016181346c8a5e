//! Pure panchang classification tables and arithmetic.
//!
//! This crate provides:
//! - Tithi/Paksha from Moon-Sun elongation
//! - Nakshatra (27-fold, with pada) and Yoga from sidereal angles
//! - Karana from elongation via the literal half-tithi table
//! - Rashi and the Rashi -> Masa naming table
//! - Regional eras, traditions and the 60-year samvatsara cycle
//! - Rahu Kaal, Yamaghanda and Gulika Kaal segments
//!
//! Nothing here touches an ephemeris; callers supply angles in degrees.

pub mod era;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod samvatsara;
pub mod time_period;
pub mod tithi;
pub mod tradition;
pub mod util;
pub mod yoga;

pub use era::{ALL_ERAS, Era, HinduYear};
pub use karana::{
    KARANA_SEGMENT_DEG, KARANA_SEQUENCE, Karana, KaranaInfo, karana_for_half,
    karana_from_elongation,
};
pub use masa::{ALL_MASAS, Masa, masa_from_rashi, masa_from_rashi_index};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_start_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rashi_from_longitude};
pub use samvatsara::Samvatsara;
pub use time_period::{
    ALL_VAARS, DAY_SEGMENTS, TimePeriod, TimePeriodKind, Vaar, all_inauspicious_periods,
    gulika_kaal, rahu_kaal, time_period, yamaghanda,
};
pub use tithi::{
    Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi, TithiResult, tithi_from_elongation,
    tithi_start_elongation,
};
pub use tradition::{ALL_TRADITIONS, MonthSystem, Tradition};
pub use util::normalize_360;
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaInfo, yoga_from_sum};
