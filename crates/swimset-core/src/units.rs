//! Pool units and course length.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Distance units a practice is written in.
///
/// Accepted spellings are case-insensitive: `meters`/`m` and `yards`/`y`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    Meters,
    /// Yards (default)
    #[default]
    Yards,
}

impl Units {
    /// Short symbol appended to distances, `m` or `y`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Yards => "y",
        }
    }
}

impl FromStr for Units {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meters" | "m" => Ok(Self::Meters),
            "yards" | "y" => Ok(Self::Yards),
            _ => Err("Unsupported units"),
        }
    }
}

impl From<Units> for &'static str {
    fn from(val: Units) -> Self {
        match val {
            Units::Meters => "meters",
            Units::Yards => "yards",
        }
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Pool length: short course (25) or long course (50).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    /// Short course (default)
    #[default]
    Short,
    Long,
}

impl FromStr for Course {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err("Unsupported course"),
        }
    }
}

impl From<Course> for &'static str {
    fn from(val: Course) -> Self {
        match val {
            Course::Short => "short",
            Course::Long => "long",
        }
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
