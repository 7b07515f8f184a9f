//! Options controlling a parse.

use swimset_core::{
    group::GroupLabel,
    policy::{DuplicateKeyPolicy, UnknownKeyPolicy},
};

/// Configuration for [`parse`](crate::parse).
///
/// # Example
///
/// ```
/// # use swimset_parser::ParseConfig;
/// # use swimset_core::policy::UnknownKeyPolicy;
///
/// let config = ParseConfig::default()
///     .with_unknown_keys(UnknownKeyPolicy::Ignore)
///     .with_max_groups(4);
/// assert_eq!(config.max_groups(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    unknown_keys: UnknownKeyPolicy,
    duplicate_keys: DuplicateKeyPolicy,
    max_groups: usize,
}

impl ParseConfig {
    /// Create a parse configuration.
    ///
    /// `max_groups` is clamped to `1..=26`, the range of group labels.
    pub fn new(
        unknown_keys: UnknownKeyPolicy,
        duplicate_keys: DuplicateKeyPolicy,
        max_groups: usize,
    ) -> Self {
        Self {
            unknown_keys,
            duplicate_keys,
            max_groups: max_groups.clamp(1, GroupLabel::COUNT),
        }
    }

    pub fn with_unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = policy;
        self
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn with_max_groups(mut self, max_groups: usize) -> Self {
        self.max_groups = max_groups.clamp(1, GroupLabel::COUNT);
        self
    }

    pub fn unknown_keys(&self) -> UnknownKeyPolicy {
        self.unknown_keys
    }

    pub fn duplicate_keys(&self) -> DuplicateKeyPolicy {
        self.duplicate_keys
    }

    /// Maximum number of groups (base plus brackets) on one item line.
    pub fn max_groups(&self) -> usize {
        self.max_groups
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(
            UnknownKeyPolicy::default(),
            DuplicateKeyPolicy::default(),
            GroupLabel::COUNT,
        )
    }
}
