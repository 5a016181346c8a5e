//! Yoga: 27 equal sectors of the summed sidereal Sun and Moon longitudes.

use crate::util::{normalize_360, sector_index};

/// Span of one yoga in degrees (same as a nakshatra).
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

const YOGA_NAMES: [&str; 27] = [
    "Vishkumbha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

impl Yoga {
    pub fn name(self) -> &'static str {
        YOGA_NAMES[self.index() as usize]
    }

    /// 0-based index (Vishkumbha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Yoga from a 1-based number, `None` outside 1..27.
    pub fn from_number(number: u8) -> Option<Yoga> {
        ALL_YOGAS.get(number.checked_sub(1)? as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based index.
    pub yoga_index: u8,
    /// Degrees elapsed within this yoga.
    pub degrees_in_yoga: f64,
}

/// Classify `(sun_sid + moon_sid) mod 360` into a yoga.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sidereal_sum_deg);
    let idx = sector_index(sum, YOGA_SEGMENT_DEG, 27);
    YogaInfo {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
        degrees_in_yoga: (sum - idx as f64 * YOGA_SEGMENT_DEG).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkumbha);
        assert_eq!(yoga_from_sum(359.999).yoga, Yoga::Vaidhriti);
    }

    #[test]
    fn sum_wraps_past_360() {
        // 350 + 20 = 370 -> 10 deg -> Vishkumbha
        assert_eq!(yoga_from_sum(370.0).yoga, Yoga::Vishkumbha);
    }

    #[test]
    fn names_follow_order() {
        assert_eq!(Yoga::Vyatipata.name(), "Vyatipata");
        assert_eq!(Yoga::Vyatipata.index(), 16);
        assert_eq!(Yoga::from_number(17), Some(Yoga::Vyatipata));
    }
}
