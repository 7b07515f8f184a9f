//! The core diagnostic type for the Swimset error system.
//!
//! A [`Diagnostic`] describes a single failure: its kind, a human-readable
//! message, the line it happened on, labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{error_kind::ErrorKind, label::Label},
    span::Span,
};

/// A failure located on one line of a practice file.
///
/// # Example
///
/// ```text
/// error[E105]: Invalid interval format
///  --> practice.prac:5:19
///   |
/// 5 |   4x50 kick @ 1:60
///   |               ^^^^ invalid interval
///   |
///   = help: use `:SS`, `M:SS`, or `H:MM:SS`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: ErrorKind,
    message: String,
    line_number: usize,
    line_text: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic for the given line.
    ///
    /// # Example
    ///
    /// ```
    /// # use swimset_parser::error::{Diagnostic, ErrorKind};
    /// # use swimset_parser::Span;
    ///
    /// let diag = Diagnostic::new(ErrorKind::InvalidUnits, "Invalid units", 1, "units: furlongs")
    ///     .with_label(Span::new(7..15), "not a unit")
    ///     .with_help("use `meters` or `yards`");
    ///
    /// assert_eq!(
    ///     diag.to_string(),
    ///     r#"error[E203]: Invalid units (line 1: "units: furlongs")"#
    /// );
    /// ```
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        line_number: usize,
        line_text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line_number,
            line_text: line_text.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based number of the offending line.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The offending line, verbatim.
    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Add a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}]: {} (line {}: {:?})",
            self.kind, self.message, self.line_number, self.line_text
        )
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(
            ErrorKind::ItemOutsideSet,
            "Item found outside of any set",
            2,
            "  200 swim",
        );

        assert_eq!(diag.kind(), ErrorKind::ItemOutsideSet);
        assert_eq!(diag.message(), "Item found outside of any set");
        assert_eq!(diag.line_number(), 2);
        assert_eq!(diag.line_text(), "  200 swim");
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_labels() {
        let diag = Diagnostic::new(ErrorKind::DuplicateConfigKey, "duplicate key", 3, "title: B")
            .with_label(Span::new(30..35), "set again here")
            .with_secondary_label(Span::new(0..5), "first set here");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            ErrorKind::NonPositiveDistance,
            "Distance must be positive",
            4,
            "  0 swim",
        );

        assert_eq!(
            diag.to_string(),
            r#"error[E200]: Distance must be positive (line 4: "  0 swim")"#
        );
    }

    #[test]
    fn test_diagnostic_display_escapes_quotes() {
        let diag = Diagnostic::new(ErrorKind::UnrecognizedLine, "Unrecognized line", 1, r#"say "hi""#);

        assert_eq!(
            diag.to_string(),
            r#"error[E100]: Unrecognized line (line 1: "say \"hi\"")"#
        );
    }
}
