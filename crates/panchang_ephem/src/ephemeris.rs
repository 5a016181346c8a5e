//! The provider interface consumed by every panchang calculator.

/// Source of Sun and Moon positions.
///
/// All times are Julian Dates in TT. All returned angles are degrees in
/// `[0, 360)`. Implementations must be pure functions of their inputs:
/// calculators call them many times per search and may cache results
/// derived from them.
pub trait Ephemeris {
    /// Apparent geocentric ecliptic longitude of the Sun.
    fn sun_tropical_longitude(&self, jd_tt: f64) -> f64;

    /// Apparent geocentric ecliptic longitude of the Moon.
    fn moon_tropical_longitude(&self, jd_tt: f64) -> f64;

    /// Convert a tropical longitude at `jd_tt` to the provider's sidereal zodiac.
    fn tropical_to_sidereal(&self, tropical_deg: f64, jd_tt: f64) -> f64;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn sun_tropical_longitude(&self, jd_tt: f64) -> f64 {
        (**self).sun_tropical_longitude(jd_tt)
    }

    fn moon_tropical_longitude(&self, jd_tt: f64) -> f64 {
        (**self).moon_tropical_longitude(jd_tt)
    }

    fn tropical_to_sidereal(&self, tropical_deg: f64, jd_tt: f64) -> f64 {
        (**self).tropical_to_sidereal(tropical_deg, jd_tt)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn sun_tropical_longitude(&self, jd_tt: f64) -> f64 {
        (**self).sun_tropical_longitude(jd_tt)
    }

    fn moon_tropical_longitude(&self, jd_tt: f64) -> f64 {
        (**self).moon_tropical_longitude(jd_tt)
    }

    fn tropical_to_sidereal(&self, tropical_deg: f64, jd_tt: f64) -> f64 {
        (**self).tropical_to_sidereal(tropical_deg, jd_tt)
    }
}
