//! Error and diagnostic system for the Swimset parser.
//!
//! The error system is built around the [`Diagnostic`] type: one failure
//! with its [`ErrorKind`] (and stable code), a message, the offending line,
//! labeled source spans, and optional help. A failed parse returns the
//! first diagnostic wrapped in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use swimset_parser::error::{Diagnostic, ErrorKind};
//! # use swimset_parser::Span;
//!
//! let diag = Diagnostic::new(
//!     ErrorKind::DuplicateConfigKey,
//!     "duplicate configuration key `title`",
//!     3,
//!     "title: Tuesday",
//! )
//! .with_label(Span::new(28..33), "set again here")
//! .with_secondary_label(Span::new(0..5), "first set here")
//! .with_help("remove one of the two lines");
//! ```

mod diagnostic;
mod error_kind;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_kind::{Category, ErrorKind};
pub use label::Label;
pub use parse_error::ParseError;

use crate::span::Span;

/// A failure found while reading a single line, before the line's number
/// and position are attached.
///
/// `span` is relative to the start of the line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LineError {
    pub kind: ErrorKind,
    pub message: String,
    pub label: String,
    pub span: Span,
    pub help: Option<String>,
}

impl LineError {
    /// Create an error labeled with the kind's description.
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            label: kind.description().to_string(),
            span,
            help: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Move the span forward by `offset` bytes.
    pub fn shift(mut self, offset: usize) -> Self {
        self.span = self.span.shift(offset);
        self
    }
}
