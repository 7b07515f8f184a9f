//! Export functionality for Swimset practices.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a parsed practice into an output format. It is the final stage in
//! the Swimset processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Practice (semantic model)
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`text`] — plain-text workout sheets via [`text::TextBuilder`] and [`text::Text`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`SwimsetError::Export`] at the crate boundary.
//!
//! [`SwimsetError::Export`]: crate::SwimsetError::Export

/// Plain-text export backend.
pub mod text;

use swimset_core::{group::GroupLabel, semantic::Practice};

/// Abstraction for practice export backends.
pub trait Exporter {
    /// Exports a practice to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupNotPresent`] if the exporter was asked for a
    /// group the practice does not have, or [`Error::Render`] if writing the
    /// output fails.
    fn export_practice(&mut self, practice: &Practice) -> Result<(), Error>;
}

/// Errors that can occur during practice export.
#[derive(Debug)]
pub enum Error {
    /// A formatting failure described by `message`.
    Render(String),
    /// A single group was requested that the practice does not define.
    GroupNotPresent {
        group: GroupLabel,
        group_count: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::GroupNotPresent { group, group_count } => {
                let last = GroupLabel::from_index(group_count.saturating_sub(1))
                    .unwrap_or(GroupLabel::BASE);
                write!(
                    f,
                    "Group {group} is not in this practice (groups A to {last})"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}
