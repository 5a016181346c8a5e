//! Tithi (lunar day) and Paksha classification from Moon-Sun elongation.
//!
//! The synodic month is divided into 30 tithis of 12 deg of elongation each.
//! Tithis 1..15 form the Shukla (waxing) paksha, 16..30 the Krishna (waning)
//! paksha. Display names repeat across the two pakshas for positions 1..14;
//! position 15 collapses to Purnima in Shukla and tithi 30 to Amavasya.

use crate::util::{normalize_360, sector_index};

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithis 1..15.
    Shukla,
    /// Waning half, tithis 16..30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Display name of a tithi: 14 repeating names plus Purnima and Amavasya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// The 14 names shared by both pakshas, keyed by position 1..14.
const PAKSHA_TITHI_NAMES: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Resolve the display name for a raw tithi number (1..30).
    ///
    /// Returns `None` outside 1..30.
    pub const fn from_number(number: u8) -> Option<Tithi> {
        match number {
            15 => Some(Tithi::Purnima),
            30 => Some(Tithi::Amavasya),
            1..=29 => Some(PAKSHA_TITHI_NAMES[((number - 1) % 15) as usize]),
            _ => None,
        }
    }
}

/// Tithi classification of an elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiResult {
    /// Display name.
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// Raw 1-based index of the 12 deg slice (1..30).
    pub number: u8,
}

impl TithiResult {
    /// Position within the paksha (1..15).
    pub const fn position_in_paksha(&self) -> u8 {
        (self.number - 1) % 15 + 1
    }
}

/// Classify a Moon-Sun elongation (degrees, any range) into a tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiResult {
    let elong = normalize_360(elongation_deg);
    let number = sector_index(elong, TITHI_SEGMENT_DEG, TITHI_COUNT) + 1;
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    // number is always 1..=30 here
    let tithi = match Tithi::from_number(number) {
        Some(t) => t,
        None => Tithi::Amavasya,
    };
    TithiResult {
        tithi,
        paksha,
        number,
    }
}

/// Elongation at which tithi `number` (1..30) begins.
pub fn tithi_start_elongation(number: u8) -> f64 {
    (number.clamp(1, TITHI_COUNT) - 1) as f64 * TITHI_SEGMENT_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tithi_is_shukla_pratipada() {
        let r = tithi_from_elongation(0.5);
        assert_eq!(r.number, 1);
        assert_eq!(r.paksha, Paksha::Shukla);
        assert_eq!(r.tithi, Tithi::Pratipada);
    }

    #[test]
    fn fifteenth_is_purnima() {
        let r = tithi_from_elongation(170.0);
        assert_eq!(r.number, 15);
        assert_eq!(r.paksha, Paksha::Shukla);
        assert_eq!(r.tithi, Tithi::Purnima);
    }

    #[test]
    fn sixteenth_is_krishna_pratipada() {
        let r = tithi_from_elongation(180.0);
        assert_eq!(r.number, 16);
        assert_eq!(r.paksha, Paksha::Krishna);
        assert_eq!(r.tithi, Tithi::Pratipada);
        assert_eq!(r.position_in_paksha(), 1);
    }

    #[test]
    fn last_is_amavasya() {
        let r = tithi_from_elongation(359.9);
        assert_eq!(r.number, 30);
        assert_eq!(r.paksha, Paksha::Krishna);
        assert_eq!(r.tithi, Tithi::Amavasya);
        assert_eq!(r.position_in_paksha(), 15);
    }

    #[test]
    fn krishna_chaturdashi() {
        let r = tithi_from_elongation(29.0 * 12.0 - 1.0);
        assert_eq!(r.number, 29);
        assert_eq!(r.tithi, Tithi::Chaturdashi);
    }

    #[test]
    fn negative_elongation_wraps() {
        let r = tithi_from_elongation(-0.5);
        assert_eq!(r.number, 30);
    }

    #[test]
    fn paksha_matches_number_over_full_circle() {
        for i in 0..3600 {
            let r = tithi_from_elongation(i as f64 * 0.1);
            assert!((1..=30).contains(&r.number));
            assert_eq!(r.paksha == Paksha::Shukla, r.number <= 15);
        }
    }

    #[test]
    fn from_number_rejects_out_of_range() {
        assert_eq!(Tithi::from_number(0), None);
        assert_eq!(Tithi::from_number(31), None);
    }

    #[test]
    fn start_elongation() {
        assert_eq!(tithi_start_elongation(1), 0.0);
        assert_eq!(tithi_start_elongation(16), 180.0);
        assert_eq!(tithi_start_elongation(30), 348.0);
    }
}
