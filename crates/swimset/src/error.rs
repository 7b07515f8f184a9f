//! Error types for Swimset operations.
//!
//! This module provides the main error type [`SwimsetError`] which wraps
//! the error conditions that can occur while processing a practice.

use std::io;

use thiserror::Error;

use swimset_parser::error::ParseError;

/// The main error type for Swimset operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the parse error so the
/// diagnostic's spans can be rendered against it.
#[derive(Debug, Error)]
pub enum SwimsetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl SwimsetError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
