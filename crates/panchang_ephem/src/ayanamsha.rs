//! Ayanamsha for the sidereal reference systems used in panchang practice.
//!
//! Each system is defined by its J2000.0 reference value. The ayanamsha at
//! any epoch adds the IAU 2006 general precession in longitude to that
//! reference.

/// Sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    /// Indian government standard (Calendar Reform Committee, 1957).
    #[default]
    Lahiri,

    /// Krishnamurti Paddhati: minimal offset from Lahiri.
    KP,

    /// B.V. Raman, zero ayanamsha year approximately 397 CE.
    Raman,

    /// Fagan-Bradley: primary Western sidereal system.
    FaganBradley,

    /// Sri Yukteshwar, "The Holy Science" (1894).
    Yukteshwar,

    /// Surya Siddhanta, carried forward with IAU precession.
    SuryaSiddhanta,
}

const ALL_SYSTEMS: [AyanamshaSystem; 6] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
    AyanamshaSystem::SuryaSiddhanta,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
            Self::SuryaSiddhanta => 22.459,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::KP => "KP",
            Self::Raman => "Raman",
            Self::FaganBradley => "Fagan-Bradley",
            Self::Yukteshwar => "Yukteshwar",
            Self::SuryaSiddhanta => "Surya Siddhanta",
        }
    }

    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }

    /// Parse a system key such as `"lahiri"` or `"fagan-bradley"`.
    pub fn from_key(key: &str) -> Option<AyanamshaSystem> {
        let key = key.to_ascii_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "lahiri" | "chitrapaksha" => Some(Self::Lahiri),
            "kp" | "krishnamurti" => Some(Self::KP),
            "raman" => Some(Self::Raman),
            "fagan-bradley" | "faganbradley" => Some(Self::FaganBradley),
            "yukteshwar" => Some(Self::Yukteshwar),
            "surya-siddhanta" | "suryasiddhanta" => Some(Self::SuryaSiddhanta),
            _ => None,
        }
    }
}

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// `t_centuries` is Julian centuries of TT since J2000.0.
pub fn general_precession_longitude_deg(t_centuries: f64) -> f64 {
    let t = t_centuries;
    let arcsec = t
        * (5028.796195
            + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    arcsec / 3600.0
}

/// Mean ayanamsha in degrees at `t_centuries` since J2000.0.
pub fn ayanamsha_deg(system: AyanamshaSystem, t_centuries: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_deg(t_centuries)
}
