//! Crack-Time Estimation
//!
//! Expected brute-force time for a given entropy at an assumed guess rate,
//! and its human-readable rendering.

use super::StrengthConfig;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 365.0 * DAY;

const INSTANT: &str = "instantly";
const SUB_SECOND: &str = "less than 1 second";
const UNCRACKABLE: &str = "practically uncrackable";

/// Expected time to brute-force a password, or a sentinel for "beyond
/// practical computation".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrackTime {
    Seconds(f64),
    Astronomical,
}

/// Average-case brute-force time: half the search space at the configured
/// guess rate.
///
/// Entropy above the configured ceiling saturates to
/// [`CrackTime::Astronomical`] rather than raising two to a power that may
/// not be representable; the same sentinel covers any non-finite
/// intermediate below the ceiling.
pub fn estimate_crack_time(bits: f64, config: &StrengthConfig) -> CrackTime {
    if bits <= 0.0 {
        return CrackTime::Seconds(0.0);
    }
    if bits > config.entropy_ceiling_bits {
        return CrackTime::Astronomical;
    }

    // 2^bits / 2 == 2^(bits - 1)
    let expected_attempts = (bits - 1.0).exp2();
    let seconds = expected_attempts / config.guesses_per_second;
    if seconds.is_finite() {
        CrackTime::Seconds(seconds)
    } else {
        CrackTime::Astronomical
    }
}

/// Render a crack-time estimate for display.
///
/// Sub-second times get fixed-precision microsecond/millisecond forms, a
/// second and above decomposes into the two largest non-zero units, and a
/// thousand years and beyond switches to magnitude words so the string never
/// grows an absurd digit count.
pub fn format_duration(estimate: CrackTime) -> String {
    let seconds = match estimate {
        CrackTime::Astronomical => return UNCRACKABLE.to_string(),
        CrackTime::Seconds(s) => s,
    };

    if seconds == 0.0 {
        INSTANT.to_string()
    } else if seconds < 1e-6 {
        format!("{:.2} microseconds", seconds * 1e6)
    } else if seconds < 1e-3 {
        format!("{:.2} milliseconds", seconds * 1e3)
    } else if seconds < 1.0 {
        SUB_SECOND.to_string()
    } else {
        decompose(seconds)
    }
}

fn count(n: u64, name: &str) -> String {
    if n == 1 {
        format!("1 {name}")
    } else {
        format!("{n} {name}s")
    }
}

/// Two-unit greedy decomposition, residual rounded into the second unit.
fn decompose(seconds: f64) -> String {
    if seconds / YEAR >= 1000.0 {
        return magnitude(seconds / YEAR);
    }

    let ladder = [
        (YEAR, "year", DAY, "day"),
        (DAY, "day", HOUR, "hour"),
        (HOUR, "hour", MINUTE, "minute"),
        (MINUTE, "minute", 1.0, "second"),
    ];

    for (unit, name, sub_unit, sub_name) in ladder {
        if seconds < unit {
            continue;
        }
        let mut whole = (seconds / unit).floor();
        let mut rest = ((seconds - whole * unit) / sub_unit).round();
        if rest >= (unit / sub_unit).round() {
            whole += 1.0;
            rest = 0.0;
        }
        if rest == 0.0 {
            return count(whole as u64, name);
        }
        return format!("{}, {}", count(whole as u64, name), count(rest as u64, sub_name));
    }

    count(seconds.round() as u64, "second")
}

/// Magnitude wording for very long durations: the smallest word that keeps
/// the mantissa under a thousand. Past the trillions the uncrackable message
/// takes over.
fn magnitude(years: f64) -> String {
    let scales = [
        (1e3, "thousand"),
        (1e6, "million"),
        (1e9, "billion"),
        (1e12, "trillion"),
    ];

    for (scale, word) in scales {
        let mantissa = years / scale;
        if mantissa < 1000.0 {
            return format!("{mantissa:.1} {word} years");
        }
    }

    UNCRACKABLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_entropy_is_instant() {
        let config = StrengthConfig::default();
        assert_eq!(estimate_crack_time(0.0, &config), CrackTime::Seconds(0.0));
        assert_eq!(estimate_crack_time(-5.0, &config), CrackTime::Seconds(0.0));
    }

    #[test]
    fn test_above_ceiling_is_astronomical() {
        let config = StrengthConfig::default();
        assert_eq!(estimate_crack_time(257.0, &config), CrackTime::Astronomical);
    }

    #[test]
    fn test_ceiling_itself_is_finite() {
        let config = StrengthConfig::default();
        match estimate_crack_time(256.0, &config) {
            CrackTime::Seconds(s) => assert!(s.is_finite() && s > 0.0),
            CrackTime::Astronomical => panic!("256 bits should still be computed"),
        }
    }

    #[test]
    fn test_overflow_below_ceiling_saturates() {
        let config = StrengthConfig {
            entropy_ceiling_bits: 5000.0,
            ..StrengthConfig::default()
        };
        // 2^1499 is not representable in f64; the guard must catch it.
        assert_eq!(estimate_crack_time(1500.0, &config), CrackTime::Astronomical);
    }

    #[test]
    fn test_average_case_halves_search_space() {
        let config = StrengthConfig {
            guesses_per_second: 1.0,
            ..StrengthConfig::default()
        };
        match estimate_crack_time(10.0, &config) {
            CrackTime::Seconds(s) => assert!((s - 512.0).abs() < 1e-9),
            CrackTime::Astronomical => panic!("10 bits is finite"),
        }
    }

    #[test]
    fn test_crack_time_monotonic_in_entropy() {
        let config = StrengthConfig::default();
        let low = estimate_crack_time(50.0, &config);
        let high = estimate_crack_time(60.0, &config);
        match (low, high) {
            (CrackTime::Seconds(a), CrackTime::Seconds(b)) => assert!(b > a),
            _ => panic!("both should be finite"),
        }
    }

    #[test]
    fn test_lowercase_password_cracks_in_seconds_scale() {
        // 8 * log2(26) ≈ 37.6 bits at 1e9 guesses/sec
        let config = StrengthConfig::default();
        match estimate_crack_time(37.6, &config) {
            CrackTime::Seconds(s) => assert!(s > 1.0 && s < 1000.0, "got {s}"),
            CrackTime::Astronomical => panic!("37.6 bits is finite"),
        }
    }

    #[test]
    fn test_format_sentinel_and_instant() {
        assert_eq!(format_duration(CrackTime::Astronomical), UNCRACKABLE);
        assert_eq!(format_duration(CrackTime::Seconds(0.0)), INSTANT);
    }

    #[test]
    fn test_format_microseconds() {
        assert_eq!(
            format_duration(CrackTime::Seconds(0.000_000_5)),
            "0.50 microseconds"
        );
    }

    #[test]
    fn test_format_milliseconds() {
        assert_eq!(
            format_duration(CrackTime::Seconds(0.000_5)),
            "0.50 milliseconds"
        );
    }

    #[test]
    fn test_format_sub_second() {
        assert_eq!(format_duration(CrackTime::Seconds(0.5)), SUB_SECOND);
    }

    #[test]
    fn test_format_seconds_and_minutes() {
        assert_eq!(format_duration(CrackTime::Seconds(30.0)), "30 seconds");
        assert_eq!(
            format_duration(CrackTime::Seconds(90.0)),
            "1 minute, 30 seconds"
        );
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_duration(CrackTime::Seconds(3_600.0)), "1 hour");
        assert_eq!(
            format_duration(CrackTime::Seconds(3_660.0)),
            "1 hour, 1 minute"
        );
    }

    #[test]
    fn test_format_days_and_years() {
        assert_eq!(
            format_duration(CrackTime::Seconds(2.0 * DAY + 3.0 * HOUR)),
            "2 days, 3 hours"
        );
        assert_eq!(
            format_duration(CrackTime::Seconds(1.5 * YEAR)),
            "1 year, 183 days"
        );
    }

    #[test]
    fn test_format_magnitude_words() {
        let five_thousand_years = CrackTime::Seconds(5_000.0 * YEAR);
        assert_eq!(format_duration(five_thousand_years), "5.0 thousand years");

        let two_million_years = CrackTime::Seconds(2_000_000.0 * YEAR);
        assert_eq!(format_duration(two_million_years), "2.0 million years");

        let forty_billion_years = CrackTime::Seconds(40e9 * YEAR);
        assert_eq!(format_duration(forty_billion_years), "40.0 billion years");
    }

    #[test]
    fn test_format_beyond_trillions_saturates() {
        let absurd = CrackTime::Seconds(1e16 * YEAR);
        assert_eq!(format_duration(absurd), UNCRACKABLE);
    }
}
