//! Configuration for panchang searches and the calculator.

use panchang_base::{MonthSystem, Tradition};

/// Newton root-finder settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSearchConfig {
    /// Convergence threshold on the angular error, degrees (default 1e-4).
    pub tolerance_deg: f64,
    /// Iteration budget (default 50).
    pub max_iterations: u32,
    /// Forward finite-difference step for the velocity estimate, days (default 0.01).
    pub velocity_step_days: f64,
    /// Velocity estimates slower than this fall back to the mean motion (default 0.1).
    pub min_velocity_deg_per_day: f64,
}

impl Default for AngleSearchConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1e-4,
            max_iterations: 50,
            velocity_step_days: 0.01,
            min_velocity_deg_per_day: 0.1,
        }
    }
}

impl AngleSearchConfig {
    /// Default settings with a different tolerance.
    pub fn with_tolerance(tolerance_deg: f64) -> Self {
        Self {
            tolerance_deg,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.velocity_step_days.is_finite() || self.velocity_step_days <= 0.0 {
            return Err("velocity_step_days must be positive");
        }
        if !self.min_velocity_deg_per_day.is_finite() || self.min_velocity_deg_per_day < 0.0 {
            return Err("min_velocity_deg_per_day must be non-negative");
        }
        Ok(())
    }
}

/// How an intercalary (adhik) month is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdhikNaming {
    /// Name from the Sun's sign at the ending new moon, like any other month.
    #[default]
    EndingSign,
    /// Name after the nija month that follows (ending sign + 1).
    FollowingMonth,
}

/// Calculator-wide settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangConfig {
    /// Regional tradition: month system and year era.
    pub tradition: Tradition,
    pub adhik_naming: AdhikNaming,
    pub search: AngleSearchConfig,
    /// Maximum resident new-moon brackets (default 12).
    pub cache_capacity: usize,
}

/// Default number of cached new-moon brackets.
pub const DEFAULT_CACHE_CAPACITY: usize = 12;

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            tradition: Tradition::default(),
            adhik_naming: AdhikNaming::default(),
            search: AngleSearchConfig::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl PanchangConfig {
    /// Default settings for a tradition.
    pub fn for_tradition(tradition: Tradition) -> Self {
        Self {
            tradition,
            ..Self::default()
        }
    }

    pub fn month_system(&self) -> MonthSystem {
        self.tradition.month_system()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.search.validate()?;
        if self.cache_capacity == 0 {
            return Err("cache_capacity must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_defaults() {
        let c = AngleSearchConfig::default();
        assert!((c.tolerance_deg - 1e-4).abs() < 1e-15);
        assert_eq!(c.max_iterations, 50);
        assert!((c.velocity_step_days - 0.01).abs() < 1e-15);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_search() {
        assert!(AngleSearchConfig::with_tolerance(0.0).validate().is_err());
        assert!(AngleSearchConfig::with_tolerance(f64::NAN).validate().is_err());
        let c = AngleSearchConfig {
            max_iterations: 0,
            ..AngleSearchConfig::default()
        };
        assert_eq!(c.validate(), Err("max_iterations must be > 0"));
    }

    #[test]
    fn panchang_defaults() {
        let c = PanchangConfig::default();
        assert_eq!(c.cache_capacity, 12);
        assert_eq!(c.adhik_naming, AdhikNaming::EndingSign);
        assert_eq!(c.month_system(), MonthSystem::Purnimant);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_cache_rejected() {
        let c = PanchangConfig {
            cache_capacity: 0,
            ..PanchangConfig::default()
        };
        assert_eq!(c.validate(), Err("cache_capacity must be > 0"));
    }

    #[test]
    fn tradition_constructor() {
        let c = PanchangConfig::for_tradition(Tradition::Gujarati);
        assert_eq!(c.month_system(), MonthSystem::Amant);
    }
}
