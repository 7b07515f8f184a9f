//! Policies controlling how strictly the configuration block is read.
//!
//! The names match external configuration strings (snake_case).

use serde::Deserialize;

/// What to do with a configuration key the parser does not recognize.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeyPolicy {
    /// Fail the parse (default)
    #[default]
    Reject,
    /// Log a warning and skip the line
    Ignore,
}

/// What to do when a configuration key appears more than once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// The last occurrence wins (default)
    #[default]
    LastWins,
    /// Fail the parse on the second occurrence
    Reject,
}
