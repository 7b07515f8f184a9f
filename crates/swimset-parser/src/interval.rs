//! Interval parsing.
//!
//! An interval is the send-off time for one repetition, written in one of
//! three forms:
//!
//! | form      | example   | rules                                   |
//! |-----------|-----------|-----------------------------------------|
//! | `:SS`     | `:55`     | two-digit seconds, `00`..`59`           |
//! | `M:SS`    | `3:00`    | one or two digit minutes, `0`..`59`     |
//! | `H:MM:SS` | `1:02:30` | any hours, two-digit minutes and seconds |
//!
//! Bare seconds (`60`) are not an interval.

use swimset_core::duration::Duration;
use thiserror::Error;

/// Why an interval failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval is empty")]
    Empty,

    #[error("`{0}` has no `:`; write seconds as `:SS`")]
    MissingColon(String),

    #[error("`{0}` has too many `:`-separated fields")]
    TooManyFields(String),

    #[error("`{field}` in `{interval}` is not a number")]
    NotANumber { interval: String, field: String },

    #[error("{unit} in `{interval}` must be written with {expected}")]
    WrongWidth {
        interval: String,
        unit: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` is too long to be an interval")]
    TooLarge(String),

    #[error("{unit} in `{interval}` must be between 0 and 59")]
    OutOfRange {
        interval: String,
        unit: &'static str,
    },
}

/// Parse an interval into a duration.
///
/// # Examples
///
/// ```
/// use swimset_parser::parse_interval;
///
/// assert_eq!(parse_interval("3:00").unwrap().as_secs(), 180);
/// assert_eq!(parse_interval(":55").unwrap().as_secs(), 55);
/// assert_eq!(parse_interval("1:02:30").unwrap().as_secs(), 3750);
/// assert!(parse_interval("1:60").is_err());
/// ```
pub fn parse_interval(text: &str) -> Result<Duration, IntervalError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(IntervalError::Empty);
    }

    let fields: Vec<&str> = text.split(':').collect();
    match fields.as_slice() {
        [_] => Err(IntervalError::MissingColon(text.to_string())),
        ["", seconds] => {
            let seconds = field(text, seconds, "seconds", 2..=2)?;
            Ok(Duration::from_secs(seconds))
        }
        [minutes, seconds] => {
            let minutes = field(text, minutes, "minutes", 1..=2)?;
            let seconds = field(text, seconds, "seconds", 2..=2)?;
            hms(text, 0, minutes, seconds)
        }
        [hours, minutes, seconds] => {
            let hours = number(text, hours)?;
            let minutes = field(text, minutes, "minutes", 2..=2)?;
            let seconds = field(text, seconds, "seconds", 2..=2)?;
            hms(text, hours, minutes, seconds)
        }
        _ => Err(IntervalError::TooManyFields(text.to_string())),
    }
}

fn hms(
    interval: &str,
    hours: u64,
    minutes: u64,
    seconds: u64,
) -> Result<Duration, IntervalError> {
    Duration::from_hms(hours, minutes, seconds)
        .ok_or_else(|| IntervalError::TooLarge(interval.to_string()))
}

/// A non-negative integer field of any width.
fn number(interval: &str, digits: &str) -> Result<u64, IntervalError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(IntervalError::NotANumber {
            interval: interval.to_string(),
            field: digits.to_string(),
        });
    }
    // All digits, so the only failure left is overflow.
    digits
        .parse()
        .map_err(|_| IntervalError::TooLarge(interval.to_string()))
}

/// A minutes or seconds field: `width` digits, value at most 59.
fn field(
    interval: &str,
    digits: &str,
    unit: &'static str,
    width: std::ops::RangeInclusive<usize>,
) -> Result<u64, IntervalError> {
    let value = number(interval, digits)?;

    if !width.contains(&digits.len()) {
        let expected = if *width.start() == 2 {
            "exactly two digits"
        } else {
            "one or two digits"
        };
        return Err(IntervalError::WrongWidth {
            interval: interval.to_string(),
            unit,
            expected,
        });
    }

    if value > 59 {
        return Err(IntervalError::OutOfRange {
            interval: interval.to_string(),
            unit,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(text: &str) -> u64 {
        parse_interval(text)
            .unwrap_or_else(|e| panic!("{text:?} failed: {e}"))
            .as_secs()
    }

    #[test]
    fn test_valid_forms() {
        assert_eq!(secs(":55"), 55);
        assert_eq!(secs(":05"), 5);
        assert_eq!(secs("3:00"), 180);
        assert_eq!(secs("0:30"), 30);
        assert_eq!(secs("12:00"), 720);
        assert_eq!(secs("05:00"), 300);
        assert_eq!(secs("59:59"), 3599);
        assert_eq!(secs("1:02:30"), 3750);
        assert_eq!(secs("10:00:00"), 36000);
        assert_eq!(secs(" 1:30 "), 90);
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(secs("0:00"), 0);
        assert_eq!(secs(":00"), 0);
    }

    #[test]
    fn test_bare_seconds_rejected() {
        assert_eq!(
            parse_interval("60"),
            Err(IntervalError::MissingColon("60".to_string()))
        );
        assert!(parse_interval("1.30").is_err());
    }

    #[test]
    fn test_range_violations() {
        assert!(matches!(
            parse_interval("1:60"),
            Err(IntervalError::OutOfRange { unit: "seconds", .. })
        ));
        assert!(matches!(
            parse_interval("60:00"),
            Err(IntervalError::OutOfRange { unit: "minutes", .. })
        ));
        assert!(matches!(
            parse_interval("1:60:00"),
            Err(IntervalError::OutOfRange { unit: "minutes", .. })
        ));
    }

    #[test]
    fn test_width_violations() {
        assert!(matches!(
            parse_interval("1:1"),
            Err(IntervalError::WrongWidth { .. })
        ));
        assert!(matches!(
            parse_interval(":1"),
            Err(IntervalError::WrongWidth { .. })
        ));
        assert!(matches!(
            parse_interval("999:00"),
            Err(IntervalError::WrongWidth { .. })
        ));
        assert!(matches!(
            parse_interval("1:2:30"),
            Err(IntervalError::WrongWidth { .. })
        ));
    }

    #[test]
    fn test_huge_hours_rejected() {
        assert_eq!(
            parse_interval("99999999999999999:00:00"),
            Err(IntervalError::TooLarge("99999999999999999:00:00".to_string()))
        );
        assert_eq!(
            parse_interval("999999999999999999999:00:00"),
            Err(IntervalError::TooLarge("999999999999999999999:00:00".to_string()))
        );
        assert_eq!(secs("5124095576030431:00:00"), 5_124_095_576_030_431 * 3600);
    }

    #[test]
    fn test_structural_violations() {
        assert_eq!(parse_interval(""), Err(IntervalError::Empty));
        assert!(matches!(
            parse_interval("1:00:00:00"),
            Err(IntervalError::TooManyFields(_))
        ));
        assert!(matches!(
            parse_interval("a:00"),
            Err(IntervalError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_interval("1:00 easy"),
            Err(IntervalError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_interval("-1:00"),
            Err(IntervalError::NotANumber { .. })
        ));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// The canonical display of any duration parses back to the same value.
    fn check_display_round_trip(secs: u64) -> Result<(), TestCaseError> {
        let text = Duration::from_secs(secs).to_string();
        prop_assert_eq!(parse_interval(&text), Ok(Duration::from_secs(secs)));
        Ok(())
    }

    /// `M:SS` with seconds above 59 never parses.
    fn check_seconds_boundary(minutes: u64, seconds: u64) -> Result<(), TestCaseError> {
        let text = format!("{minutes}:{seconds:02}");
        prop_assert!(parse_interval(&text).is_err(), "`{}` parsed", text);
        Ok(())
    }

    proptest! {
        #[test]
        fn display_round_trip(secs in 0u64..200_000) {
            check_display_round_trip(secs)?;
        }

        #[test]
        fn seconds_boundary(minutes in 0u64..60, seconds in 60u64..100) {
            check_seconds_boundary(minutes, seconds)?;
        }
    }
}
