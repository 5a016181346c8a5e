//! Regional calendrical traditions: month system and year era.

use crate::era::Era;

/// Where a lunar month begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthSystem {
    /// New moon to new moon.
    #[default]
    Amant,
    /// Full moon to full moon.
    Purnimant,
}

impl MonthSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amant => "Amant",
            Self::Purnimant => "Purnimant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tradition {
    /// Purnimant months, Vikram Samvat.
    #[default]
    NorthIndian,
    /// Amant months, Vikram Samvat.
    Gujarati,
    /// Amant months, Shaka Samvat.
    Marathi,
    /// Amant months, Bangabda.
    Bengali,
    /// Amant months, Thiruvalluvar.
    Tamil,
    /// Amant months, Kollavarsham.
    Malayalam,
    /// Purnimant months, Nanakshahi.
    Sikh,
    /// Purnimant months, Vir Nirvana Samvat.
    Jain,
}

pub const ALL_TRADITIONS: [Tradition; 8] = [
    Tradition::NorthIndian,
    Tradition::Gujarati,
    Tradition::Marathi,
    Tradition::Bengali,
    Tradition::Tamil,
    Tradition::Malayalam,
    Tradition::Sikh,
    Tradition::Jain,
];

impl Tradition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthIndian => "North Indian",
            Self::Gujarati => "Gujarati",
            Self::Marathi => "Marathi",
            Self::Bengali => "Bengali",
            Self::Tamil => "Tamil",
            Self::Malayalam => "Malayalam",
            Self::Sikh => "Sikh",
            Self::Jain => "Jain",
        }
    }

    pub const fn month_system(self) -> MonthSystem {
        match self {
            Self::NorthIndian | Self::Sikh | Self::Jain => MonthSystem::Purnimant,
            Self::Gujarati | Self::Marathi | Self::Bengali | Self::Tamil | Self::Malayalam => {
                MonthSystem::Amant
            }
        }
    }

    pub const fn era(self) -> Era {
        match self {
            Self::NorthIndian | Self::Gujarati => Era::VikramSamvat,
            Self::Marathi => Era::Shaka,
            Self::Bengali => Era::Bangabda,
            Self::Tamil => Era::Thiruvalluvar,
            Self::Malayalam => Era::Kollavarsham,
            Self::Sikh => Era::Nanakshahi,
            Self::Jain => Era::VirNirvanaSamvat,
        }
    }

    /// Parse a lowercase tradition key such as `"tamil"` or `"north-indian"`.
    pub fn from_key(key: &str) -> Option<Tradition> {
        let key = key.to_ascii_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "north-indian" | "north" | "hindi" => Some(Self::NorthIndian),
            "gujarati" => Some(Self::Gujarati),
            "marathi" => Some(Self::Marathi),
            "bengali" => Some(Self::Bengali),
            "tamil" => Some(Self::Tamil),
            "malayalam" => Some(Self::Malayalam),
            "sikh" | "punjabi" => Some(Self::Sikh),
            "jain" => Some(Self::Jain),
            _ => None,
        }
    }
}
