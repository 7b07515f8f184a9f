//! Whole-second durations used for intervals and time totals.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Mul},
};

/// A non-negative span of time measured in whole seconds.
///
/// Intervals in a practice file never carry sub-second precision, so the
/// value is stored as a plain second count. Equality and ordering are
/// numeric.
///
/// # Display
///
/// The canonical form mirrors the practice language: `:SS` below a minute,
/// `M:SS` below an hour, and `H:MM:SS` otherwise.
///
/// ```
/// use swimset_core::duration::Duration;
///
/// assert_eq!(Duration::from_secs(55).to_string(), ":55");
/// assert_eq!(Duration::from_secs(180).to_string(), "3:00");
/// assert_eq!(Duration::from_secs(3750).to_string(), "1:02:30");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u64);

impl Duration {
    /// The zero duration.
    pub const ZERO: Self = Self(0);

    /// Create a duration from a number of seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Create a duration from hour, minute, and second components.
    ///
    /// Returns `None` if the total number of seconds does not fit in a `u64`.
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Option<Self> {
        let Some(hours) = hours.checked_mul(3600) else {
            return None;
        };
        let Some(minutes) = minutes.checked_mul(60) else {
            return None;
        };
        let Some(total) = hours.checked_add(minutes) else {
            return None;
        };
        match total.checked_add(seconds) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }

    /// Total number of seconds.
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this duration is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Duration {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;

        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else if minutes > 0 {
            write!(f, "{minutes}:{seconds:02}")
        } else {
            write!(f, ":{seconds:02}")
        }
    }
}
