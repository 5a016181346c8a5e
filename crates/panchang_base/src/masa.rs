//! Masa (lunar month) names and the Rashi -> Masa table.
//!
//! A lunar month is named after the sidereal sign the Sun occupies at the
//! new moon that ends it: Mesha -> Chaitra, Vrishabha -> Vaishakha, and so on
//! through Meena -> Phalguna.

use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (0 = Chaitra).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

/// Masa named by each rashi, indexed by rashi index.
const RASHI_TO_MASA: [Masa; 12] = [
    Masa::Chaitra,      // Mesha
    Masa::Vaishakha,    // Vrishabha
    Masa::Jyeshtha,     // Mithuna
    Masa::Ashadha,      // Karka
    Masa::Shravana,     // Simha
    Masa::Bhadrapada,   // Kanya
    Masa::Ashvina,      // Tula
    Masa::Kartika,      // Vrischika
    Masa::Margashirsha, // Dhanu
    Masa::Pausha,       // Makara
    Masa::Magha,        // Kumbha
    Masa::Phalguna,     // Meena
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The following month, Phalguna wrapping to Chaitra.
    pub const fn next(self) -> Masa {
        ALL_MASAS[(self.index() as usize + 1) % 12]
    }
}

/// Masa for a 0-based rashi index; indices wrap modulo 12.
pub const fn masa_from_rashi_index(rashi_index: u8) -> Masa {
    RASHI_TO_MASA[(rashi_index % 12) as usize]
}

/// Masa named by a rashi.
pub fn masa_from_rashi(rashi: Rashi) -> Masa {
    masa_from_rashi_index(rashi.index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn mesha_is_chaitra() {
        assert_eq!(masa_from_rashi(Rashi::Mesha), Masa::Chaitra);
        assert_eq!(masa_from_rashi(Rashi::Makara), Masa::Pausha);
        assert_eq!(masa_from_rashi(Rashi::Meena), Masa::Phalguna);
    }

    #[test]
    fn table_follows_sign_order() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(masa_from_rashi(*r).index() as usize, i);
        }
    }

    #[test]
    fn index_wraps() {
        assert_eq!(masa_from_rashi_index(12), Masa::Chaitra);
    }

    #[test]
    fn next_wraps_phalguna() {
        assert_eq!(Masa::Phalguna.next(), Masa::Chaitra);
        assert_eq!(Masa::Shravana.next(), Masa::Bhadrapada);
    }
}
