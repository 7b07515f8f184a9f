//! Swimset - A plain-text language for multi-group swim practices.
//!
//! Parsing and rendering for the Swimset practice language. A practice is
//! written once, with bracketed variations on each line for the slower or
//! faster groups, and rendered as one workout sheet per group.

pub mod config;
pub mod export;

mod error;

pub use swimset_core::{duration, group, policy, semantic, summary, units};

pub use error::SwimsetError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, text::TextBuilder};
use group::GroupLabel;

/// Builder for parsing and rendering Swimset practices.
///
/// # Examples
///
/// ```rust
/// use swimset::{PracticeBuilder, config::AppConfig};
///
/// let source = "units: meters\nWarmup:\n  400 swim @ 6:00";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = PracticeBuilder::new(config);
///
/// // Parse source to semantic model
/// let practice = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render every group as plain text
/// let text = builder.render_text(&practice, None)
///     .expect("Failed to render");
/// assert!(text.contains("WORKOUT TOTAL: 400m"));
///
/// // Or use default config
/// let builder = PracticeBuilder::default();
/// ```
#[derive(Default)]
pub struct PracticeBuilder {
    config: AppConfig,
}

impl PracticeBuilder {
    /// Create a new practice builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including parser and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a semantic practice.
    ///
    /// # Arguments
    ///
    /// * `source` - Swimset practice source as a string
    ///
    /// # Errors
    ///
    /// Returns [`SwimsetError::Parse`] carrying the first error in the
    /// source together with the source text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swimset::PracticeBuilder;
    ///
    /// let builder = PracticeBuilder::default();
    /// let practice = builder.parse("Main Set x3:\n  4x100 free @ 1:30")
    ///     .expect("Failed to parse practice");
    /// assert_eq!(practice.sets()[0].repeat_count(), 3);
    /// ```
    pub fn parse(&self, source: &str) -> Result<semantic::Practice, SwimsetError> {
        info!("Parsing practice");

        let practice = swimset_parser::parse(source, self.config.parser().parse_config())
            .map_err(|err| SwimsetError::new_parse_error(err, source))?;

        info!(
            sets = practice.sets().len(),
            groups = practice.group_count();
            "Practice parsed successfully"
        );
        trace!(practice:?; "Parsed practice");

        Ok(practice)
    }

    /// Render a practice as plain-text workout sheets.
    ///
    /// With `group` set, only that group's sheet is rendered; otherwise one
    /// sheet per group, separated by a rule.
    ///
    /// # Errors
    ///
    /// Returns [`SwimsetError::Export`] if `group` is not in the practice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swimset::{PracticeBuilder, group::GroupLabel};
    ///
    /// let builder = PracticeBuilder::default();
    /// let practice = builder.parse("Main:\n  4x50 kick [3x50]").unwrap();
    ///
    /// let b: GroupLabel = "B".parse().unwrap();
    /// let text = builder.render_text(&practice, Some(b)).unwrap();
    /// assert!(text.contains("GROUP B"));
    /// ```
    pub fn render_text(
        &self,
        practice: &semantic::Practice,
        group: Option<GroupLabel>,
    ) -> Result<String, SwimsetError> {
        info!(group:? = group; "Rendering practice as text");

        let mut exporter = TextBuilder::new()
            .with_render_config(self.config.render().clone())
            .with_group(group)
            .build();
        exporter.export_practice(practice)?;

        debug!("Text rendered successfully");
        Ok(exporter.into_string())
    }
}
