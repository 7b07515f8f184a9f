//! The ParseError type returned by a failed parse.
//!
//! Parsing is fail-fast: the first failure in line order aborts the parse
//! and is returned as the single [`Diagnostic`] of a [`ParseError`].

use std::fmt;

use crate::error::{Diagnostic, ErrorKind};

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error type for a failed parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostic: Box<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic: Box::new(diagnostic),
        }
    }

    /// The diagnostic describing the failure.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Shorthand for `self.diagnostic().kind()`.
    pub fn kind(&self) -> ErrorKind {
        self.diagnostic.kind()
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        *self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}
