use clap::{Parser, Subcommand};
use panchang_base::{Era, Tradition, Vaar, all_inauspicious_periods};
use panchang_ephem::{
    AnalyticEphemeris, AyanamshaSystem, calendar_to_jd, jd_to_calendar, weekday_from_jd,
};
use panchang_search::{
    AdhikNaming, DayContext, PanchangCalculator, PanchangConfig, PanchangDay, SearchDirection,
    SearchError,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panchang", about = "Panchang calculator CLI")]
struct Cli {
    /// Ayanamsha: lahiri (default), kp, raman, fagan-bradley, yukteshwar, surya-siddhanta
    #[arg(long, global = true, default_value = "lahiri")]
    ayanamsha: String,
    /// Tradition: north-indian (default), gujarati, marathi, bengali, tamil, malayalam, sikh, jain
    #[arg(long, global = true, default_value = "north-indian")]
    tradition: String,
    /// Name adhik months after the following month instead of the ending sign
    #[arg(long, global = true)]
    adhik_following: bool,
    /// Debug logging (RUST_LOG overrides per target)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tithi and paksha, with the tithi's start and end
    Tithi {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
    },
    /// Nakshatra and pada of the sidereal Moon
    Nakshatra {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
    },
    /// Yoga from the sidereal Sun+Moon sum
    Yoga {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
    },
    /// Karana (half-tithi)
    Karana {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
    },
    /// Lunar month under the selected tradition
    Masa {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
    },
    /// Year in every regional era
    Year {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
    },
    /// Nearest new moon (Amavasya)
    NewMoon {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
        /// Search forward instead of backward
        #[arg(long)]
        forward: bool,
    },
    /// Nearest full moon (Purnima)
    FullMoon {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
        /// Search forward instead of backward
        #[arg(long)]
        forward: bool,
    },
    /// Rahu Kaal, Yamaghanda and Gulika Kaal for a day
    RahuKaal {
        /// Sunrise to sunset, minutes
        daylight_minutes: f64,
        /// Day of week, 1 = Sunday .. 7 = Saturday
        weekday: u8,
    },
    /// Full panchang for one or more consecutive days
    Panchang {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[Z]) or a Julian Date
        date: String,
        /// Number of consecutive days
        #[arg(long, default_value = "1")]
        days: u32,
        /// Sunrise to sunset, minutes; enables the time periods
        #[arg(long)]
        daylight_minutes: Option<f64>,
    },
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm:ss[Z]`, or a bare Julian Date.
///
/// Civil time is taken as TT; the ~70 s difference from UT is below the
/// resolution of any panchang boundary printed here.
fn parse_jd(s: &str) -> Result<f64, String> {
    if let Ok(jd) = s.parse::<f64>() {
        if !jd.is_finite() {
            return Err(format!("Julian Date must be finite, got {s}"));
        }
        return Ok(jd);
    }
    let s = s.trim_end_matches('Z');
    let (date, time) = match s.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };
    let date_parts: Vec<&str> = date.split('-').collect();
    if date_parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD[Thh:mm:ss], got {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(format!("invalid calendar date: {date}"));
    }

    let mut day_frac = day as f64;
    if let Some(time) = time {
        let time_parts: Vec<&str> = time.split(':').collect();
        if time_parts.len() != 3 {
            return Err(format!("invalid time format: {time}"));
        }
        let hour: f64 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
        let minute: f64 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
        let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
        day_frac += hour / 24.0 + minute / 1440.0 + second / 86_400.0;
    }
    Ok(calendar_to_jd(year, month, day_frac))
}

fn format_jd(jd: f64) -> String {
    // Round to the minute first so 23:59:30 and later carries into the next day.
    let minutes = ((jd + 0.5) * 1440.0).round() as i64;
    let minute_of_day = minutes.rem_euclid(1440);
    let midnight_jd = minutes.div_euclid(1440) as f64 - 0.5;
    let (year, month, day_frac) = jd_to_calendar(midnight_jd + 0.25);
    format!(
        "{year:04}-{month:02}-{:02} {:02}:{:02} TT (JD {jd:.5})",
        day_frac.floor() as u32,
        minute_of_day / 60,
        minute_of_day % 60
    )
}

fn format_minutes(m: f64) -> String {
    let total = m.round() as u32;
    format!("{}h{:02}m", total / 60, total % 60)
}

fn parse_or_exit(date: &str) -> f64 {
    parse_jd(date).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require<T>(result: Result<T, SearchError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn build_calculator(cli: &Cli) -> PanchangCalculator<AnalyticEphemeris> {
    let ayanamsha = AyanamshaSystem::from_key(&cli.ayanamsha).unwrap_or_else(|| {
        eprintln!("Invalid ayanamsha: {}", cli.ayanamsha);
        eprintln!("Valid: lahiri, kp, raman, fagan-bradley, yukteshwar, surya-siddhanta");
        std::process::exit(1);
    });
    let tradition = Tradition::from_key(&cli.tradition).unwrap_or_else(|| {
        eprintln!("Invalid tradition: {}", cli.tradition);
        eprintln!(
            "Valid: north-indian, gujarati, marathi, bengali, tamil, malayalam, sikh, jain"
        );
        std::process::exit(1);
    });
    let config = PanchangConfig {
        tradition,
        adhik_naming: if cli.adhik_following {
            AdhikNaming::FollowingMonth
        } else {
            AdhikNaming::EndingSign
        },
        ..PanchangConfig::default()
    };
    require(PanchangCalculator::new(AnalyticEphemeris::new(ayanamsha), config))
}

fn direction(forward: bool) -> SearchDirection {
    if forward {
        SearchDirection::Forward
    } else {
        SearchDirection::Backward
    }
}

fn print_day(day: &PanchangDay) {
    println!("{}", format_jd(day.jd_tt));
    println!(
        "  Tithi:     {} {} ({}), ends {}",
        day.tithi.paksha.name(),
        day.tithi.tithi.name(),
        day.tithi.number,
        format_jd(day.tithi_end_jd)
    );
    println!(
        "  Nakshatra: {} pada {}, ends {}",
        day.nakshatra.nakshatra.name(),
        day.nakshatra.pada,
        format_jd(day.nakshatra_end_jd)
    );
    println!("  Yoga:      {}", day.yoga.yoga.name());
    println!("  Karana:    {}", day.karana.karana.name());
    println!(
        "  Masa:      {}{}",
        if day.month.is_adhik_maas { "Adhik " } else { "" },
        day.month.month.name()
    );
    println!(
        "  Year:      {} {} ({})",
        day.year.era.name(),
        day.year.year,
        day.samvatsara.name()
    );
    if let Some(periods) = &day.periods {
        for p in periods {
            println!(
                "  {:<11} {} - {} after sunrise",
                format!("{}:", p.name()),
                format_minutes(p.start_minutes),
                format_minutes(p.end_minutes)
            );
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Tithi { date } => {
            let jd = parse_or_exit(date);
            let calc = build_calculator(&cli);
            let t = calc.tithi(jd);
            let span = require(calc.tithi_span(jd));
            println!(
                "{} {} (tithi {}, {} of paksha)",
                t.paksha.name(),
                t.tithi.name(),
                t.number,
                t.position_in_paksha()
            );
            println!("  Start: {}", format_jd(span.start_jd));
            println!("  End:   {}", format_jd(span.end_jd));
        }

        Commands::Nakshatra { date } => {
            let jd = parse_or_exit(date);
            let calc = build_calculator(&cli);
            let n = calc.nakshatra(jd);
            let span = require(calc.nakshatra_span(jd));
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                n.nakshatra.name(),
                n.nakshatra_index,
                n.pada,
                n.degrees_in_nakshatra
            );
            println!("  Start: {}", format_jd(span.start_jd));
            println!("  End:   {}", format_jd(span.end_jd));
        }

        Commands::Yoga { date } => {
            let jd = parse_or_exit(date);
            let calc = build_calculator(&cli);
            let y = calc.yoga(jd);
            let span = require(calc.yoga_span(jd));
            println!(
                "{} (index {}) ({:.4} deg in yoga)",
                y.yoga.name(),
                y.yoga_index,
                y.degrees_in_yoga
            );
            println!("  Start: {}", format_jd(span.start_jd));
            println!("  End:   {}", format_jd(span.end_jd));
        }

        Commands::Karana { date } => {
            let jd = parse_or_exit(date);
            let k = build_calculator(&cli).karana(jd);
            println!(
                "{} (index {}, tithi {}, {} half)",
                k.karana.name(),
                k.karana_index,
                k.tithi_number,
                if k.second_half { "second" } else { "first" }
            );
        }

        Commands::Masa { date } => {
            let jd = parse_or_exit(date);
            let calc = build_calculator(&cli);
            let m = require(calc.hindu_month(jd));
            println!(
                "{}{} ({})",
                if m.is_adhik_maas { "Adhik " } else { "" },
                m.month.name(),
                calc.config().month_system().name()
            );
            println!("  Start: {}", format_jd(m.start_jd));
            println!("  End:   {}", format_jd(m.end_jd));
        }

        Commands::Year { date } => {
            let jd = parse_or_exit(date);
            let calc = build_calculator(&cli);
            let month = require(calc.hindu_month(jd));
            let (gregorian_year, _, _) = jd_to_calendar(jd);
            println!("Masa: {}", month.month.name());
            for era in panchang_base::ALL_ERAS {
                let marker = if era == calc.config().tradition.era() { "*" } else { " " };
                println!(
                    "{marker} {:<20} {}",
                    era.name(),
                    Era::year_for(era, gregorian_year, month.month)
                );
            }
        }

        Commands::NewMoon { date, forward } => {
            let jd = parse_or_exit(date);
            let found = require(build_calculator(&cli).new_moon(jd, direction(*forward)));
            println!("New moon: {}", format_jd(found));
        }

        Commands::FullMoon { date, forward } => {
            let jd = parse_or_exit(date);
            let found = require(build_calculator(&cli).full_moon(jd, direction(*forward)));
            println!("Full moon: {}", format_jd(found));
        }

        Commands::RahuKaal {
            daylight_minutes,
            weekday,
        } => {
            let vaar = Vaar::from_day_number(*weekday).unwrap_or_else(|| {
                eprintln!("Invalid weekday: {weekday} (1 = Sunday .. 7 = Saturday)");
                std::process::exit(1);
            });
            if !daylight_minutes.is_finite() || *daylight_minutes <= 0.0 {
                eprintln!("daylight_minutes must be positive");
                std::process::exit(1);
            }
            println!("{} ({})", vaar.name(), vaar.english_name());
            for p in all_inauspicious_periods(*daylight_minutes, vaar) {
                println!(
                    "  {:<12} {} - {} after sunrise",
                    p.name(),
                    format_minutes(p.start_minutes),
                    format_minutes(p.end_minutes)
                );
            }
        }

        Commands::Panchang {
            date,
            days,
            daylight_minutes,
        } => {
            let jd = parse_or_exit(date);
            let calc = build_calculator(&cli);
            let result = if *days <= 1 {
                let ctx = daylight_minutes.map(|m| {
                    DayContext::new(m, Vaar::from_index(weekday_from_jd(jd)))
                });
                calc.panchang(jd, ctx).map(|d| vec![d])
            } else {
                calc.panchang_range(jd, *days, *daylight_minutes)
            };
            for day in require(result) {
                print_day(&day);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_only() {
        assert_eq!(parse_jd("2000-01-01").unwrap(), 2_451_544.5);
    }

    #[test]
    fn parse_datetime() {
        let jd = parse_jd("2000-01-01T12:00:00Z").unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn parse_bare_jd() {
        assert_eq!(parse_jd("2460000.5").unwrap(), 2_460_000.5);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_jd("2024-13-01").is_err());
        assert!(parse_jd("yesterday").is_err());
        assert!(parse_jd("2024-01-01T12:00").is_err());
    }

    #[test]
    fn parse_rejects_non_finite_jd() {
        assert!(parse_jd("nan").is_err());
        assert!(parse_jd("inf").is_err());
        assert!(parse_jd("-inf").is_err());
    }

    #[test]
    fn late_seconds_carry_into_next_day() {
        // 1999-12-31 23:59:48
        let jd = 2_451_544.5 - 12.0 / 86_400.0;
        assert!(format_jd(jd).starts_with("2000-01-01 00:00 TT"), "{}", format_jd(jd));
    }

    #[test]
    fn minutes_format() {
        assert_eq!(format_minutes(630.0), "10h30m");
    }

    #[test]
    fn jd_format_round_trips() {
        assert!(format_jd(2_451_545.0).starts_with("2000-01-01 12:00 TT"));
    }
}
