//! Property tests against synthetic ephemerides.
//!
//! The stubs are exact linear models, so every expected root is known in
//! closed form. `Counting` wraps a stub and records how many longitude
//! queries reach it.

use std::sync::atomic::{AtomicUsize, Ordering};

use panchang_base::{
    ALL_NAKSHATRAS, ALL_YOGAS, Era, Masa, NAKSHATRA_SPAN_27, Paksha, Vaar, YOGA_SEGMENT_DEG,
    rahu_kaal,
};
use panchang_ephem::Ephemeris;
use panchang_search::{
    AdhikNaming, AngleSearchConfig, Mutex, NewMoonCache, PanchangCalculator, PanchangConfig,
    SYNODIC_MONTH_DAYS, SearchDirection, amant_month, calculate_nakshatra, calculate_tithi,
    calculate_yoga, find_moon_sun_angle, find_new_moon,
};

const JD0: f64 = 2_460_000.0;

/// New moon at `JD0`, uniform synodic motion, Sun moving at `sun_rate`
/// from `sun0` (tropical = sidereal).
#[derive(Clone, Copy)]
struct Uniform {
    sun0: f64,
    sun_rate: f64,
}

impl Default for Uniform {
    fn default() -> Self {
        Self {
            sun0: 20.0,
            sun_rate: 0.9856,
        }
    }
}

impl Ephemeris for Uniform {
    fn sun_tropical_longitude(&self, jd: f64) -> f64 {
        (self.sun0 + self.sun_rate * (jd - JD0)).rem_euclid(360.0)
    }
    fn moon_tropical_longitude(&self, jd: f64) -> f64 {
        let elong = (jd - JD0) * 360.0 / SYNODIC_MONTH_DAYS;
        (self.sun_tropical_longitude(jd) + elong).rem_euclid(360.0)
    }
    fn tropical_to_sidereal(&self, tropical_deg: f64, _jd: f64) -> f64 {
        tropical_deg
    }
}

/// Fixed Sun and Moon longitudes.
struct Snapshot {
    sun: f64,
    moon: f64,
}

impl Ephemeris for Snapshot {
    fn sun_tropical_longitude(&self, _jd: f64) -> f64 {
        self.sun
    }
    fn moon_tropical_longitude(&self, _jd: f64) -> f64 {
        self.moon
    }
    fn tropical_to_sidereal(&self, tropical_deg: f64, _jd: f64) -> f64 {
        tropical_deg
    }
}

struct Counting<E> {
    inner: E,
    calls: AtomicUsize,
}

impl<E> Counting<E> {
    fn new(inner: E) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E: Ephemeris> Ephemeris for Counting<E> {
    fn sun_tropical_longitude(&self, jd: f64) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.sun_tropical_longitude(jd)
    }
    fn moon_tropical_longitude(&self, jd: f64) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.moon_tropical_longitude(jd)
    }
    fn tropical_to_sidereal(&self, tropical_deg: f64, jd: f64) -> f64 {
        self.inner.tropical_to_sidereal(tropical_deg, jd)
    }
}

#[test]
fn tithi_number_and_paksha_agree() {
    let eph = Uniform::default();
    let mut jd = JD0 - 40.0;
    while jd < JD0 + 40.0 {
        let t = calculate_tithi(&eph, jd);
        assert!((1..=30).contains(&t.number), "number {} at {jd}", t.number);
        assert_eq!(t.paksha == Paksha::Shukla, t.number <= 15, "at {jd}");
        jd += 0.137;
    }
}

#[test]
fn root_finder_idempotent_from_output() {
    let eph = Uniform::default();
    let cfg = AngleSearchConfig::default();
    for target in [0.0, 47.5, 180.0, 359.9] {
        let first = find_moon_sun_angle(&eph, JD0 + 3.0, target, &cfg).unwrap();
        let again = find_moon_sun_angle(&eph, first.jd_tt, target, &cfg).unwrap();
        assert_eq!(again.iterations, 1, "target {target}");
        assert_eq!(again.jd_tt, first.jd_tt);
    }
}

#[test]
fn nakshatra_sectors_are_lower_inclusive() {
    for (k, expected) in ALL_NAKSHATRAS.iter().enumerate() {
        let start = k as f64 * NAKSHATRA_SPAN_27;
        let at_start = calculate_nakshatra(&Snapshot { sun: 0.0, moon: start }, 0.0);
        assert_eq!(at_start.nakshatra, *expected, "boundary {k}");
        let mid = calculate_nakshatra(
            &Snapshot {
                sun: 0.0,
                moon: start + NAKSHATRA_SPAN_27 / 2.0,
            },
            0.0,
        );
        assert_eq!(mid.nakshatra, *expected, "mid {k}");
    }
}

#[test]
fn yoga_sectors_are_lower_inclusive() {
    for (k, expected) in ALL_YOGAS.iter().enumerate() {
        let start = k as f64 * YOGA_SEGMENT_DEG;
        let at_start = calculate_yoga(&Snapshot { sun: 0.0, moon: start }, 0.0);
        assert_eq!(at_start.yoga, *expected, "boundary {k}");
    }
    // Just below 360 is the last yoga, not a 28th.
    let last = calculate_yoga(
        &Snapshot {
            sun: 200.0,
            moon: 159.999_999,
        },
        0.0,
    );
    assert_eq!(last.yoga_index, 26);
}

#[test]
fn adhik_iff_sign_unchanged() {
    let cfg = AngleSearchConfig::default();
    let frozen = Uniform {
        sun0: 45.0,
        sun_rate: 0.0,
    };
    let m = amant_month(&frozen, JD0 + 12.0, AdhikNaming::EndingSign, &cfg, None).unwrap();
    assert!(m.is_adhik_maas);
    assert_eq!(m.month, Masa::Vaishakha);

    let moving = Uniform::default();
    let m = amant_month(&moving, JD0 + 12.0, AdhikNaming::EndingSign, &cfg, None).unwrap();
    assert!(!m.is_adhik_maas);
    assert_eq!(m.month, Masa::Vaishakha);
}

#[test]
fn vikram_samvat_offsets() {
    assert_eq!(Era::VikramSamvat.year_for(2024, Masa::Chaitra), 2081);
    assert_eq!(Era::VikramSamvat.year_for(2024, Masa::Pausha), 2080);
}

#[test]
fn rahu_kaal_day_one() {
    let vaar = Vaar::from_day_number(1).unwrap();
    let p = rahu_kaal(720.0, vaar);
    assert_eq!((p.start_minutes, p.end_minutes), (630.0, 720.0));
}

#[test]
fn cached_backward_query_skips_ephemeris() {
    let eph = Counting::new(Uniform::default());
    let cfg = AngleSearchConfig::default();
    let cache = Mutex::new(NewMoonCache::default());

    let first = find_new_moon(&eph, JD0 + 5.0, SearchDirection::Backward, &cfg, Some(&cache))
        .unwrap();
    let after_first = eph.calls();
    assert!(after_first > 0);

    let second = find_new_moon(&eph, JD0 + 9.0, SearchDirection::Backward, &cfg, Some(&cache))
        .unwrap();
    assert_eq!(second, first);
    assert_eq!(eph.calls(), after_first, "second query reached the ephemeris");
}

#[test]
fn query_outside_bracket_misses() {
    let eph = Counting::new(Uniform::default());
    let cfg = AngleSearchConfig::default();
    let cache = Mutex::new(NewMoonCache::default());

    find_new_moon(&eph, JD0 + 5.0, SearchDirection::Backward, &cfg, Some(&cache)).unwrap();
    let before = eph.calls();
    let next = find_new_moon(&eph, JD0 + 35.0, SearchDirection::Backward, &cfg, Some(&cache))
        .unwrap();
    assert!(eph.calls() > before);
    assert!((next - (JD0 + SYNODIC_MONTH_DAYS)).abs() < 1e-4);
}

#[test]
fn calculator_forward_hits_after_backward() {
    let calc = PanchangCalculator::with_defaults(Counting::new(Uniform::default()));
    let back = calc.new_moon(JD0 + 7.0, SearchDirection::Backward).unwrap();
    let calls = calc.ephemeris().calls();
    let fwd = calc.new_moon(JD0 + 7.0, SearchDirection::Forward).unwrap();
    assert_eq!(calc.ephemeris().calls(), calls);
    assert!((fwd - back - SYNODIC_MONTH_DAYS).abs() < 1e-3);
}

#[test]
fn full_moon_is_never_cached() {
    let calc = PanchangCalculator::with_defaults(Counting::new(Uniform::default()));
    calc.full_moon(JD0 + 3.0, SearchDirection::Forward).unwrap();
    let calls = calc.ephemeris().calls();
    calc.full_moon(JD0 + 3.0, SearchDirection::Forward).unwrap();
    assert!(calc.ephemeris().calls() > calls);
    assert_eq!(calc.cached_brackets(), 0);
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calc = PanchangCalculator::new(Uniform::default(), PanchangConfig::default()).unwrap();
    std::thread::scope(|s| {
        for i in 0..4 {
            let calc = &calc;
            s.spawn(move || {
                let jd = JD0 + 2.0 + i as f64;
                calc.new_moon(jd, SearchDirection::Backward).unwrap();
            });
        }
    });
    assert!(calc.cached_brackets() >= 1);
}
