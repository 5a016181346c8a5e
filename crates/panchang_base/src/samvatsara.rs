//! Samvatsara: position in the 60-year Jovian cycle.
//!
//! Cycle epoch: the year beginning in CE 1987 is Prabhava (order 1).
//! A Vedic year begins in spring, so the months that fall in the early part
//! of a Gregorian year belong to the samvatsara that began the year before.

use crate::era::Era;
use crate::masa::Masa;

#[rustfmt::skip]
const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava", "Vibhava", "Shukla", "Pramoda", "Prajapati",
    "Angirasa", "Shrimukha", "Bhava", "Yuva", "Dhatri",
    "Ishvara", "Bahudhanya", "Pramathi", "Vikrama", "Vrisha",
    "Chitrabhanu", "Subhanu", "Tarana", "Parthiva", "Vyaya",
    "Sarvajit", "Sarvadhari", "Virodhi", "Vikriti", "Khara",
    "Nandana", "Vijaya", "Jaya", "Manmatha", "Durmukhi",
    "Hemalambi", "Vilambi", "Vikari", "Sharvari", "Plava",
    "Shubhakrit", "Shobhakrit", "Krodhi", "Vishvavasu", "Parabhava",
    "Plavanga", "Kilaka", "Saumya", "Sadharana", "Virodhikrit",
    "Paridhavi", "Pramadi", "Ananda", "Rakshasa", "Nala",
    "Pingala", "Kalayukta", "Siddharthi", "Raudra", "Durmati",
    "Dundubhi", "Rudhirodgari", "Raktakshi", "Krodhana", "Akshaya",
];

/// CE year that begins Prabhava.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// Vikram Samvat offset for months after the spring new year.
const VIKRAM_SPRING_OFFSET: i32 = 57;

/// A year of the 60-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Samvatsara {
    order: u8,
}

impl Samvatsara {
    /// Samvatsara from its 1-based order in the cycle, `None` outside 1..60.
    pub fn from_order(order: u8) -> Option<Samvatsara> {
        (1..=60).contains(&order).then_some(Samvatsara { order })
    }

    /// Samvatsara of the Vedic year that begins in Gregorian `year`.
    pub fn from_year(year: i32) -> Samvatsara {
        let order = (year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u8 + 1;
        Samvatsara { order }
    }

    /// Samvatsara in force during `masa` of Gregorian `gregorian_year`.
    ///
    /// Pausha, Magha and Phalguna close the year that began the previous
    /// spring; the split matches the Vikram Samvat year rollover.
    pub fn for_month(gregorian_year: i32, masa: Masa) -> Samvatsara {
        let year_start =
            gregorian_year + Era::VikramSamvat.offset(masa) - VIKRAM_SPRING_OFFSET;
        Self::from_year(year_start)
    }

    /// 1-based order (Prabhava = 1 .. Akshaya = 60).
    pub const fn order(self) -> u8 {
        self.order
    }

    pub const fn name(self) -> &'static str {
        SAMVATSARA_NAMES[(self.order - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_prabhava() {
        let s = Samvatsara::from_year(1987);
        assert_eq!(s.order(), 1);
        assert_eq!(s.name(), "Prabhava");
    }

    #[test]
    fn cycle_repeats() {
        assert_eq!(Samvatsara::from_year(2047), Samvatsara::from_year(1987));
        assert_eq!(Samvatsara::from_year(1986).order(), 60);
    }

    #[test]
    fn year_2024_is_krodhi() {
        let s = Samvatsara::from_year(2024);
        assert_eq!(s.order(), 38);
        assert_eq!(s.name(), "Krodhi");
    }

    #[test]
    fn winter_months_belong_to_previous_year() {
        assert_eq!(Samvatsara::for_month(2024, Masa::Pausha).name(), "Shobhakrit");
        assert_eq!(Samvatsara::for_month(2024, Masa::Phalguna).name(), "Shobhakrit");
        assert_eq!(Samvatsara::for_month(2024, Masa::Chaitra).name(), "Krodhi");
        assert_eq!(Samvatsara::for_month(2024, Masa::Margashirsha).name(), "Krodhi");
    }

    #[test]
    fn order_bounds() {
        assert!(Samvatsara::from_order(0).is_none());
        assert!(Samvatsara::from_order(61).is_none());
        assert_eq!(Samvatsara::from_order(60).map(|s| s.name()), Some("Akshaya"));
    }
}
