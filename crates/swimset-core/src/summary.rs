//! Derived distance and time totals.
//!
//! A [`PracticeSummary`] is a read-only view computed from a parsed
//! [`Practice`]. It holds one [`GroupSummary`] per group, each listing the
//! totals of every set in source order.

use crate::{duration::Duration, group::GroupLabel, semantic::Practice, units::Units};

/// Totals for one set as swum by one group.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSummary {
    name: String,
    repeat_count: u32,
    distance: f64,
    time: Duration,
}

impl SetSummary {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Distance including set repetition.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Estimated time including set repetition.
    pub fn time(&self) -> Duration {
        self.time
    }
}

/// Per-set totals and overall totals for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    group: GroupLabel,
    sets: Vec<SetSummary>,
}

impl GroupSummary {
    pub fn group(&self) -> GroupLabel {
        self.group
    }

    pub fn sets(&self) -> &[SetSummary] {
        &self.sets
    }

    pub fn total_distance(&self) -> f64 {
        self.sets.iter().map(SetSummary::distance).sum()
    }

    pub fn total_time(&self) -> Duration {
        self.sets.iter().map(SetSummary::time).sum()
    }
}

/// Totals for every group of a practice.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSummary {
    units: Units,
    groups: Vec<GroupSummary>,
}

impl PracticeSummary {
    /// Compute the summary of a practice.
    pub fn new(practice: &Practice) -> Self {
        let groups = practice
            .groups()
            .map(|group| GroupSummary {
                group,
                sets: practice
                    .sets()
                    .iter()
                    .map(|set| SetSummary {
                        name: set.name().to_string(),
                        repeat_count: set.repeat_count(),
                        distance: set.total_distance(group),
                        time: set.total_time(group),
                    })
                    .collect(),
            })
            .collect();

        Self {
            units: practice.config().units(),
            groups,
        }
    }

    /// Units the distances are expressed in.
    pub fn units(&self) -> Units {
        self.units
    }

    pub fn groups(&self) -> &[GroupSummary] {
        &self.groups
    }

    /// The summary of one group, if the practice has it.
    pub fn group(&self, group: GroupLabel) -> Option<&GroupSummary> {
        self.groups.get(group.index())
    }
}
