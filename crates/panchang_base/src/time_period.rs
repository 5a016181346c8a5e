//! Rahu Kaal, Yamaghanda and Gulika Kaal.
//!
//! Daylight (sunrise to sunset) is cut into 8 equal segments. Each period
//! occupies one segment, chosen per weekday from a fixed traditional table.
//! Results are minutes after sunrise.

/// Weekday of the Vedic day (sunrise to sunrise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All weekdays, Sunday first.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday from a 0-based index (Sunday = 0), wrapping modulo 7.
    pub const fn from_index(index: u8) -> Vaar {
        ALL_VAARS[(index % 7) as usize]
    }

    /// Weekday from a day-of-week number, 1 = Sunday .. 7 = Saturday.
    pub fn from_day_number(day: u8) -> Option<Vaar> {
        ALL_VAARS.get(day.checked_sub(1)? as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePeriodKind {
    RahuKaal,
    Yamaghanda,
    GulikaKaal,
}

impl TimePeriodKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamaghanda => "Yamaghanda",
            Self::GulikaKaal => "Gulika Kaal",
        }
    }

    /// 1-based daylight segment (of 8) for a weekday.
    pub const fn segment(self, vaar: Vaar) -> u8 {
        let table = match self {
            Self::RahuKaal => &RAHU_KAAL_SEGMENTS,
            Self::Yamaghanda => &YAMAGHANDA_SEGMENTS,
            Self::GulikaKaal => &GULIKA_KAAL_SEGMENTS,
        };
        table[vaar.index() as usize]
    }
}

// Indexed Sunday..Saturday.
const RAHU_KAAL_SEGMENTS: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
const YAMAGHANDA_SEGMENTS: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];
const GULIKA_KAAL_SEGMENTS: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Number of equal daylight segments.
pub const DAY_SEGMENTS: u8 = 8;

/// A sub-interval of daylight, in minutes after sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePeriod {
    pub kind: TimePeriodKind,
    pub start_minutes: f64,
    pub end_minutes: f64,
}

impl TimePeriod {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn duration_minutes(&self) -> f64 {
        self.end_minutes - self.start_minutes
    }
}

/// Period of `kind` on `vaar` for a day of `day_duration_minutes` of daylight.
pub fn time_period(kind: TimePeriodKind, day_duration_minutes: f64, vaar: Vaar) -> TimePeriod {
    let segment_duration = day_duration_minutes / DAY_SEGMENTS as f64;
    let start = (kind.segment(vaar) - 1) as f64 * segment_duration;
    TimePeriod {
        kind,
        start_minutes: start,
        end_minutes: start + segment_duration,
    }
}

pub fn rahu_kaal(day_duration_minutes: f64, vaar: Vaar) -> TimePeriod {
    time_period(TimePeriodKind::RahuKaal, day_duration_minutes, vaar)
}

pub fn yamaghanda(day_duration_minutes: f64, vaar: Vaar) -> TimePeriod {
    time_period(TimePeriodKind::Yamaghanda, day_duration_minutes, vaar)
}

pub fn gulika_kaal(day_duration_minutes: f64, vaar: Vaar) -> TimePeriod {
    time_period(TimePeriodKind::GulikaKaal, day_duration_minutes, vaar)
}

/// Rahu Kaal, Yamaghanda and Gulika Kaal, in that order.
pub fn all_inauspicious_periods(day_duration_minutes: f64, vaar: Vaar) -> [TimePeriod; 3] {
    [
        rahu_kaal(day_duration_minutes, vaar),
        yamaghanda(day_duration_minutes, vaar),
        gulika_kaal(day_duration_minutes, vaar),
    ]
}
