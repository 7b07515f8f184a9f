//! Group labels for the parallel skill-level variants of a practice.
//!
//! Group `A` is always the base group written outside of brackets. Each
//! bracketed variation on an item line adds the next letter.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a string is not a valid group label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid group `{0}`: expected a single letter from A to Z")]
pub struct GroupLabelError(String);

/// A group label, `A` through `Z`.
///
/// # Examples
///
/// ```
/// use swimset_core::group::GroupLabel;
///
/// let b: GroupLabel = "b".parse().unwrap();
/// assert_eq!(b.index(), 1);
/// assert_eq!(b.to_string(), "B");
/// assert_eq!(GroupLabel::BASE.to_string(), "A");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupLabel(u8);

impl GroupLabel {
    /// The base group, `A`.
    pub const BASE: Self = Self(0);

    /// Number of distinct labels available (`A` through `Z`).
    pub const COUNT: usize = 26;

    /// Create a label from a zero-based group index.
    ///
    /// Returns `None` when the index is outside `0..26`.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|i| usize::from(*i) < Self::COUNT)
            .map(Self)
    }

    /// Zero-based index of this group.
    pub fn index(&self) -> usize {
        usize::from(self.0)
    }

    /// Returns `true` for the base group `A`.
    pub fn is_base(&self) -> bool {
        self.0 == 0
    }

    /// The label letter.
    pub fn as_char(&self) -> char {
        char::from(b'A' + self.0)
    }

    /// Iterate the first `count` labels, capped at `Z`.
    pub fn first_n(count: usize) -> impl Iterator<Item = Self> {
        (0..count.min(Self::COUNT)).filter_map(Self::from_index)
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for GroupLabel {
    type Err = GroupLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(Self(c.to_ascii_uppercase() as u8 - b'A'))
            }
            _ => Err(GroupLabelError(s.to_string())),
        }
    }
}
