//! Practice-level structure: configuration metadata and named sets.

use std::num::NonZeroU32;

use crate::{
    duration::Duration,
    group::GroupLabel,
    semantic::item::{Item, Variant},
    summary::PracticeSummary,
    units::{Course, Units},
};

/// Metadata from the configuration block at the top of a practice file.
///
/// Built once before any set is read and immutable afterwards. The free-form
/// fields are stored verbatim; `units` and `course` fall back to yards and
/// short course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeConfig {
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    description: Option<String>,
    level: Option<String>,
    units: Units,
    course: Course,
}

impl PracticeConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.course = course;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn course(&self) -> Course {
        self.course
    }
}

/// A named block of items, optionally repeated as a whole.
///
/// Items are stored once regardless of `repeat_count`; repetition is applied
/// as a multiplier by the totals and by renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    name: String,
    repeat_count: NonZeroU32,
    header_comment: Option<String>,
    items: Vec<Item>,
}

impl Set {
    /// Create a new set.
    pub fn new(
        name: impl Into<String>,
        repeat_count: NonZeroU32,
        header_comment: Option<String>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            name: name.into(),
            repeat_count,
            header_comment,
            items,
        }
    }

    /// The set name as written in its header, without the `xN` suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many times the whole set is swum, at least 1.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count.get()
    }

    /// Comment attached to the header line or written directly below it.
    pub fn header_comment(&self) -> Option<&str> {
        self.header_comment.as_deref()
    }

    /// The stored items, once each.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Largest group count of any item in this set (at least 1).
    pub fn group_count(&self) -> usize {
        self.items
            .iter()
            .map(Item::group_count)
            .max()
            .unwrap_or(1)
    }

    /// The variants a group swims in this set, one per stored item.
    pub fn variants(&self, group: GroupLabel) -> impl Iterator<Item = &Variant> {
        self.items.iter().map(move |item| item.variant(group))
    }

    /// Distance swum by a group, including set repetition.
    pub fn total_distance(&self, group: GroupLabel) -> f64 {
        let once: f64 = self.variants(group).map(Variant::total_distance).sum();
        once * f64::from(self.repeat_count.get())
    }

    /// Estimated time for a group from the intervals, including set repetition.
    ///
    /// Items without an interval contribute no time.
    pub fn total_time(&self, group: GroupLabel) -> Duration {
        let once: Duration = self.variants(group).map(Variant::total_time).sum();
        once * self.repeat_count.get()
    }
}

/// A parsed practice: configuration plus its sets in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Practice {
    config: PracticeConfig,
    sets: Vec<Set>,
}

impl Practice {
    /// Create a practice from its configuration and sets.
    pub fn new(config: PracticeConfig, sets: Vec<Set>) -> Self {
        Self { config, sets }
    }

    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    pub fn sets(&self) -> &[Set] {
        &self.sets
    }

    /// Returns `true` when the practice has no sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Number of groups present: 1 + the largest bracket count of any item.
    pub fn group_count(&self) -> usize {
        self.sets.iter().map(Set::group_count).max().unwrap_or(1)
    }

    /// Labels of all groups present, `A` first.
    pub fn groups(&self) -> impl Iterator<Item = GroupLabel> {
        GroupLabel::first_n(self.group_count())
    }

    /// Total distance for a group across all sets.
    pub fn total_distance(&self, group: GroupLabel) -> f64 {
        self.sets.iter().map(|set| set.total_distance(group)).sum()
    }

    /// Total estimated time for a group across all sets.
    pub fn total_time(&self, group: GroupLabel) -> Duration {
        self.sets.iter().map(|set| set.total_time(group)).sum()
    }

    /// Per-group, per-set totals.
    pub fn summary(&self) -> PracticeSummary {
        PracticeSummary::new(self)
    }
}
