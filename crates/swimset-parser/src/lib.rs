//! # Swimset Parser
//!
//! Parser for the Swimset practice language. This crate turns practice
//! source text into the semantic model of [`swimset_core`].
//!
//! ## Usage
//!
//! ```
//! # use swimset_parser::{parse, ParseConfig, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "\
//! title: Tuesday
//! units: meters
//!
//! Warmup:
//!   400 swim @ 6:00
//!
//! Main Set x2:
//!   4x100 free @ 1:30 [1:40] [1:50]
//! ";
//!
//!     let practice = parse(source, ParseConfig::default())?;
//!     assert_eq!(practice.group_count(), 3);
//!     Ok(())
//! }
//! ```

mod assemble;
mod classify;
pub mod error;
mod interval;
mod metadata;
mod options;
mod resolve;
mod source;
mod span;
mod tokenizer;

pub use error::ParseError;
pub use interval::{IntervalError, parse_interval};
pub use options::ParseConfig;
pub use span::{Span, Spanned};

use log::debug;
use swimset_core::semantic::Practice;

use assemble::Assembler;

/// Parse practice source text into a [`Practice`].
///
/// Lines are read in order:
///
/// 1. **Classify** - Decide whether each line is blank, a comment, a
///    configuration pair, a set header, or an item
/// 2. **Tokenize** - Split item lines into reps, distance, description,
///    interval, and bracketed group variations
/// 3. **Resolve** - Validate the fields and build one variant per group
/// 4. **Assemble** - Collect items under their set and configuration into
///    the practice
///
/// Parsing stops at the first error.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the failing line's number and text,
/// the error code, and labeled spans into `source`.
///
/// # Example
///
/// ```
/// # use swimset_parser::{parse, ParseConfig, error::ErrorKind};
///
/// let err = parse("units: kilometers", ParseConfig::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidUnits);
/// assert_eq!(err.diagnostic().line_number(), 1);
/// ```
pub fn parse(source: &str, config: ParseConfig) -> Result<Practice, ParseError> {
    debug!(bytes = source.len(), config:? = config; "Parsing practice");

    let mut assembler = Assembler::new(&config);
    for line in source::lines(source) {
        assembler.push(&line)?;
    }
    let practice = assembler.finish();

    debug!(sets = practice.sets().len(), groups = practice.group_count(); "Practice parsed");
    Ok(practice)
}
