//! Configuration types for Swimset parsing and rendering.
//!
//! This module provides configuration structures that control how practices
//! are parsed and rendered. All types implement [`serde::Deserialize`] for
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining parser and render settings.
//! - [`ParserConfig`] - Strictness of the configuration block and the group limit.
//! - [`RenderConfig`] - What the text renderer includes besides the items.
//!
//! # Example
//!
//! ```
//! # use swimset::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.parser().max_groups(), 26);
//! assert!(config.render().show_times());
//! ```

use serde::Deserialize;

use swimset_core::{
    group::GroupLabel,
    policy::{DuplicateKeyPolicy, UnknownKeyPolicy},
};
use swimset_parser::ParseConfig;

/// Top-level application configuration combining parser and render settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified parser and render configurations.
    pub fn new(parser: ParserConfig, render: RenderConfig) -> Self {
        Self { parser, render }
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Parser strictness settings.
///
/// Maps onto [`ParseConfig`], which clamps `max_groups` to `1..=26`.
/// The CLI rejects a configuration file holding a value outside that range.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// What to do with a configuration key the parser does not know.
    unknown_keys: UnknownKeyPolicy,

    /// What to do when a configuration key appears twice.
    duplicate_keys: DuplicateKeyPolicy,

    /// Largest number of groups an item may define.
    max_groups: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::default(),
            duplicate_keys: DuplicateKeyPolicy::default(),
            max_groups: GroupLabel::COUNT,
        }
    }
}

impl ParserConfig {
    pub fn new(
        unknown_keys: UnknownKeyPolicy,
        duplicate_keys: DuplicateKeyPolicy,
        max_groups: usize,
    ) -> Self {
        Self {
            unknown_keys,
            duplicate_keys,
            max_groups,
        }
    }

    pub fn unknown_keys(&self) -> UnknownKeyPolicy {
        self.unknown_keys
    }

    pub fn duplicate_keys(&self) -> DuplicateKeyPolicy {
        self.duplicate_keys
    }

    pub fn max_groups(&self) -> usize {
        self.max_groups
    }

    /// The options handed to [`swimset_parser::parse`].
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.unknown_keys, self.duplicate_keys, self.max_groups)
    }
}

/// Text rendering options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Print set header comments and item comments.
    show_comments: bool,

    /// Print the estimated time when the practice has intervals.
    show_times: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_comments: true,
            show_times: true,
        }
    }
}

impl RenderConfig {
    pub fn new(show_comments: bool, show_times: bool) -> Self {
        Self {
            show_comments,
            show_times,
        }
    }

    pub fn show_comments(&self) -> bool {
        self.show_comments
    }

    pub fn show_times(&self) -> bool {
        self.show_times
    }
}
