//! Workout items and their per-group variants.

use std::{fmt, num::NonZeroU32};

use crate::{duration::Duration, group::GroupLabel};

/// A positive, finite swim distance.
///
/// Distances are usually whole pool lengths but the language accepts
/// decimals (for example `12.5` for a half length in a 25 pool).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    /// Create a distance, returning `None` unless `value` is finite and
    /// strictly positive.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// The distance as a float.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One fully resolved workout instruction for a single group.
///
/// A variant is what a swimmer in one group actually does for an item line:
/// `reps` repetitions of `distance`, described by `description`, leaving on
/// each of `intervals` (one send-off per lane, usually just one).
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    reps: NonZeroU32,
    distance: Distance,
    description: String,
    intervals: Vec<Duration>,
}

impl Variant {
    /// Create a new variant.
    pub fn new(
        reps: NonZeroU32,
        distance: Distance,
        description: impl Into<String>,
        intervals: Vec<Duration>,
    ) -> Self {
        Self {
            reps,
            distance,
            description: description.into(),
            intervals,
        }
    }

    /// Number of repetitions, at least 1.
    pub fn reps(&self) -> u32 {
        self.reps.get()
    }

    /// Distance of a single repetition.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Free-text description, never empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// All send-off intervals written for this variant.
    pub fn intervals(&self) -> &[Duration] {
        &self.intervals
    }

    /// The primary interval, used for time estimates.
    pub fn interval(&self) -> Option<Duration> {
        self.intervals.first().copied()
    }

    /// `reps × distance`.
    pub fn total_distance(&self) -> f64 {
        f64::from(self.reps.get()) * self.distance.value()
    }

    /// `reps × interval`, or zero when no interval is given.
    pub fn total_time(&self) -> Duration {
        self.interval().unwrap_or_default() * self.reps.get()
    }
}

/// A single workout line of a set, resolved for every group it defines.
///
/// The base variant (group `A`) always exists. Groups beyond
/// [`group_count`](Item::group_count) fall back to the base variant, so a
/// renderer can ask any item for any group of the practice.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    line: usize,
    comment: Option<String>,
    variants: Vec<Variant>,
}

impl Item {
    /// Create an item from its base variant and the bracketed variations
    /// that follow it (group `B` onwards).
    pub fn new(
        line: usize,
        comment: Option<String>,
        base: Variant,
        variations: impl IntoIterator<Item = Variant>,
    ) -> Self {
        let mut variants = vec![base];
        variants.extend(variations);
        Self {
            line,
            comment,
            variants,
        }
    }

    /// 1-based source line this item was parsed from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Trailing comment written on the item line.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Number of groups this line defines explicitly (1 + bracket count).
    pub fn group_count(&self) -> usize {
        self.variants.len()
    }

    /// The base variant, group `A`.
    pub fn base(&self) -> &Variant {
        &self.variants[0]
    }

    /// All explicitly defined variants, base first.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// The variant a group swims, falling back to the base variant.
    pub fn variant(&self, group: GroupLabel) -> &Variant {
        self.variants.get(group.index()).unwrap_or(self.base())
    }

    /// The interval for a group, if one was written.
    pub fn interval(&self, group: GroupLabel) -> Option<Duration> {
        self.variant(group).interval()
    }
}
