//! Error kinds for the Swimset diagnostic system.
//!
//! Each kind carries a stable code, organized by category:
//! - `E1xx` - Syntax errors (the line cannot be read)
//! - `E2xx` - Validation errors (the line reads but a value is not allowed)
//! - `E3xx` - Structural errors (the line is out of place in the file)

use std::fmt;

/// Broad classification of an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Syntax,
    Validation,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Syntax => write!(f, "syntax"),
            Category::Validation => write!(f, "validation"),
            Category::Structural => write!(f, "structural"),
        }
    }
}

/// The kind of failure a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// A top-level line that is neither configuration, header, nor comment.
    ///
    /// Item lines must be indented; a non-indented line is only accepted as
    /// a `key: value` pair or a set header.
    UnrecognizedLine,

    /// A `[` without its `]`, a stray `]`, or a nested bracket.
    UnbalancedBrackets,

    /// Text left over after the last field of an item line.
    TrailingGarbage,

    /// An item line without a distance.
    MissingDistance,

    /// An item line without a description.
    MissingDescription,

    /// An interval that is not `:SS`, `M:SS`, or `H:MM:SS`.
    InvalidIntervalFormat,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// A distance of zero or less.
    NonPositiveDistance,

    /// A repetition count of zero or less.
    NonPositiveReps,

    /// A set header `xN` suffix that is not a positive integer.
    InvalidRepeatCount,

    /// A `units` value other than meters or yards.
    InvalidUnits,

    /// A `course` value other than short or long.
    InvalidCourse,

    /// A configuration key that is not recognized.
    UnknownConfigKey,

    /// More bracketed variations than there are group labels.
    TooManyGroups,

    /// A configuration key given twice while duplicates are rejected.
    DuplicateConfigKey,

    /// A number too large to represent.
    NumberOutOfRange,

    // =========================================================================
    // Structural Errors (E3xx)
    // =========================================================================
    /// An item line before the first set header.
    ItemOutsideSet,

    /// A configuration line after the first set header.
    ConfigAfterSet,

    /// A set header with nothing before its `:`.
    MissingSetName,
}

impl ErrorKind {
    /// Returns the stable code, e.g. `"E105"`.
    pub fn code(&self) -> &'static str {
        match self {
            // Syntax errors
            ErrorKind::UnrecognizedLine => "E100",
            ErrorKind::UnbalancedBrackets => "E101",
            ErrorKind::TrailingGarbage => "E102",
            ErrorKind::MissingDistance => "E103",
            ErrorKind::MissingDescription => "E104",
            ErrorKind::InvalidIntervalFormat => "E105",
            // Validation errors
            ErrorKind::NonPositiveDistance => "E200",
            ErrorKind::NonPositiveReps => "E201",
            ErrorKind::InvalidRepeatCount => "E202",
            ErrorKind::InvalidUnits => "E203",
            ErrorKind::InvalidCourse => "E204",
            ErrorKind::UnknownConfigKey => "E205",
            ErrorKind::TooManyGroups => "E206",
            ErrorKind::DuplicateConfigKey => "E207",
            ErrorKind::NumberOutOfRange => "E208",
            // Structural errors
            ErrorKind::ItemOutsideSet => "E300",
            ErrorKind::ConfigAfterSet => "E301",
            ErrorKind::MissingSetName => "E302",
        }
    }

    /// Returns a short description of what this kind means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::UnrecognizedLine => "unrecognized line",
            ErrorKind::UnbalancedBrackets => "unbalanced brackets",
            ErrorKind::TrailingGarbage => "unexpected text",
            ErrorKind::MissingDistance => "missing distance",
            ErrorKind::MissingDescription => "missing description",
            ErrorKind::InvalidIntervalFormat => "invalid interval",
            ErrorKind::NonPositiveDistance => "distance must be positive",
            ErrorKind::NonPositiveReps => "repetitions must be positive",
            ErrorKind::InvalidRepeatCount => "invalid repeat count",
            ErrorKind::InvalidUnits => "invalid units",
            ErrorKind::InvalidCourse => "invalid course",
            ErrorKind::UnknownConfigKey => "unknown configuration key",
            ErrorKind::TooManyGroups => "too many groups",
            ErrorKind::DuplicateConfigKey => "duplicate configuration key",
            ErrorKind::NumberOutOfRange => "number out of range",
            ErrorKind::ItemOutsideSet => "item outside of any set",
            ErrorKind::ConfigAfterSet => "configuration after first set",
            ErrorKind::MissingSetName => "missing set name",
        }
    }

    pub fn category(&self) -> Category {
        match self.code().as_bytes()[1] {
            b'1' => Category::Syntax,
            b'2' => Category::Validation,
            _ => Category::Structural,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
