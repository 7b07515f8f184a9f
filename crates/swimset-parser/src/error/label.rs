//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the practice source.
///
/// The primary label marks the offending text. Secondary labels point at
/// related text elsewhere in the file:
///
/// ```text
/// error[E207]: duplicate configuration key `title`
///  --> practice.prac:3:1
///   |
/// 1 | title: Monday
///   | ----- first set here
/// 2 | units: meters
/// 3 | title: Tuesday
///   | ^^^^^ set again here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span into the full source text.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
