//! Karana: half-tithi divisions.
//!
//! Sixty half-tithis per synodic month carry 11 names: four fixed karanas
//! pinned to the month boundary (Kimstughna on the first half of Shukla
//! Pratipada; Shakuni, Chatushpada and Naga on the last three halves of the
//! month) and seven movable karanas cycling through the 56 halves between.
//! The table below is transcribed literally rather than generated.

use crate::tithi::{TITHI_SEGMENT_DEG, tithi_from_elongation};
use crate::util::normalize_360;

/// Span of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this is one of the four fixed (sthira) karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

use Karana::{
    Balava, Bava, Chatushpada, Garaja, Kaulava, Kimstughna, Naga, Shakuni, Taitila, Vanija, Vishti,
};

/// Karana for each half-tithi, index = 2*(tithi_number-1) + half (0 or 1).
#[rustfmt::skip]
pub const KARANA_SEQUENCE: [Karana; 60] = [
    // Shukla 1..15
    Kimstughna, Bava,
    Balava, Kaulava,
    Taitila, Garaja,
    Vanija, Vishti,
    Bava, Balava,
    Kaulava, Taitila,
    Garaja, Vanija,
    Vishti, Bava,
    Balava, Kaulava,
    Taitila, Garaja,
    Vanija, Vishti,
    Bava, Balava,
    Kaulava, Taitila,
    Garaja, Vanija,
    Vishti, Bava,
    // Krishna 16..30
    Balava, Kaulava,
    Taitila, Garaja,
    Vanija, Vishti,
    Bava, Balava,
    Kaulava, Taitila,
    Garaja, Vanija,
    Vishti, Bava,
    Balava, Kaulava,
    Taitila, Garaja,
    Vanija, Vishti,
    Bava, Balava,
    Kaulava, Taitila,
    Garaja, Vanija,
    Vishti, Shakuni,
    Chatushpada, Naga,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based half-tithi index within the month (0..59).
    pub karana_index: u8,
    /// Raw tithi number (1..30) this karana belongs to.
    pub tithi_number: u8,
    /// `false` for the first half of the tithi, `true` for the second.
    pub second_half: bool,
}

/// Karana for a tithi number (1..30) and half. `None` for an invalid tithi.
pub fn karana_for_half(tithi_number: u8, second_half: bool) -> Option<Karana> {
    if !(1..=30).contains(&tithi_number) {
        return None;
    }
    let idx = (tithi_number as usize - 1) * 2 + usize::from(second_half);
    Some(KARANA_SEQUENCE[idx])
}

/// Classify a Moon-Sun elongation into a karana.
///
/// The tithi number comes from the 12 deg slice; the half is decided by
/// whether the position within the tithi is below 6 deg.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = normalize_360(elongation_deg);
    let tithi_number = tithi_from_elongation(elong).number;
    let within = (elong - (tithi_number - 1) as f64 * TITHI_SEGMENT_DEG).max(0.0);
    let second_half = within >= KARANA_SEGMENT_DEG;
    let karana_index = (tithi_number - 1) * 2 + u8::from(second_half);
    KaranaInfo {
        karana: KARANA_SEQUENCE[karana_index as usize],
        karana_index,
        tithi_number,
        second_half,
    }
}
