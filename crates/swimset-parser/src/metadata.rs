//! Configuration block parsing.
//!
//! The lines before the first set header may set practice metadata as
//! `key: value` pairs. Keys are matched case-insensitively:
//!
//! | key           | value                                   |
//! |---------------|-----------------------------------------|
//! | `title`       | free text                               |
//! | `author`      | free text                               |
//! | `date`        | free text                               |
//! | `description` | free text                               |
//! | `level`       | free text                               |
//! | `units`       | `meters`, `yards`, `m`, `y`             |
//! | `course`      | `short`, `long`                         |

use std::mem;

use indexmap::IndexMap;
use log::{debug, warn};
use swimset_core::{
    policy::{DuplicateKeyPolicy, UnknownKeyPolicy},
    semantic::PracticeConfig,
    units::{Course, Units},
};

use crate::{
    error::{ErrorKind, LineError, Result},
    options::ParseConfig,
    source::SourceLine,
    span::{Span, Spanned},
};

const KNOWN_KEYS: [&str; 7] = [
    "title",
    "author",
    "date",
    "description",
    "level",
    "units",
    "course",
];

/// Accumulates configuration lines into a [`PracticeConfig`].
#[derive(Debug)]
pub(crate) struct MetadataBuilder {
    unknown_keys: UnknownKeyPolicy,
    duplicate_keys: DuplicateKeyPolicy,
    /// Recognized keys in order of first appearance, with that line's key span.
    seen: IndexMap<String, Span>,
    config: PracticeConfig,
}

impl MetadataBuilder {
    pub(crate) fn new(options: &ParseConfig) -> Self {
        Self {
            unknown_keys: options.unknown_keys(),
            duplicate_keys: options.duplicate_keys(),
            seen: IndexMap::new(),
            config: PracticeConfig::default(),
        }
    }

    /// Apply one `key: value` line.
    pub(crate) fn apply(
        &mut self,
        line: &SourceLine<'_>,
        key: Spanned<&str>,
        value: Spanned<&str>,
    ) -> Result<()> {
        let name = key.inner().to_ascii_lowercase();

        if !KNOWN_KEYS.contains(&name.as_str()) {
            return match self.unknown_keys {
                UnknownKeyPolicy::Reject => Err(line.diagnostic(
                    LineError::new(
                        ErrorKind::UnknownConfigKey,
                        format!("Unknown configuration key `{}`", key.inner()),
                        key.span(),
                    )
                    .with_help(format!("known keys are {}", KNOWN_KEYS.join(", "))),
                )),
                UnknownKeyPolicy::Ignore => {
                    warn!(key = key.inner(), line = line.number(); "Ignoring unknown configuration key");
                    Ok(())
                }
            };
        }

        let key_span = line.span(key.span());
        if let Some(first) = self.seen.get(&name) {
            match self.duplicate_keys {
                DuplicateKeyPolicy::Reject => {
                    return Err(line
                        .diagnostic(
                            LineError::new(
                                ErrorKind::DuplicateConfigKey,
                                format!("Configuration key `{name}` is set more than once"),
                                key.span(),
                            )
                            .with_label("set again here")
                            .with_help("remove one of the two lines"),
                        )
                        .with_secondary_label(*first, "first set here"));
                }
                DuplicateKeyPolicy::LastWins => {
                    debug!(key = name.as_str(), line = line.number(); "Configuration key set again, last value wins");
                }
            }
        } else {
            self.seen.insert(name.clone(), key_span);
        }

        let text = *value.inner();
        match name.as_str() {
            "title" => self.update(|c| c.with_title(text)),
            "author" => self.update(|c| c.with_author(text)),
            "date" => self.update(|c| c.with_date(text)),
            "description" => self.update(|c| c.with_description(text)),
            "level" => self.update(|c| c.with_level(text)),
            "units" => {
                let units = text.parse::<Units>().map_err(|_| {
                    line.diagnostic(
                        LineError::new(
                            ErrorKind::InvalidUnits,
                            format!("Invalid units `{text}`"),
                            value.span(),
                        )
                        .with_help("use `meters`, `yards`, `m`, or `y`"),
                    )
                })?;
                self.update(|c| c.with_units(units));
            }
            "course" => {
                let course = text.parse::<Course>().map_err(|_| {
                    line.diagnostic(
                        LineError::new(
                            ErrorKind::InvalidCourse,
                            format!("Invalid course `{text}`"),
                            value.span(),
                        )
                        .with_help("use `short` or `long`"),
                    )
                })?;
                self.update(|c| c.with_course(course));
            }
            _ => {}
        }

        Ok(())
    }

    fn update(&mut self, f: impl FnOnce(PracticeConfig) -> PracticeConfig) {
        self.config = f(mem::take(&mut self.config));
    }

    /// The finished configuration.
    pub(crate) fn finish(self) -> PracticeConfig {
        debug!(keys:? = self.seen.keys().collect::<Vec<_>>(); "Configuration block read");
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{LineKind, classify};

    fn apply_lines(options: ParseConfig, lines: &[&str]) -> Result<PracticeConfig> {
        let mut builder = MetadataBuilder::new(&options);
        let mut offset = 0;
        for (index, text) in lines.iter().enumerate() {
            let line = SourceLine::new(index + 1, text, offset);
            offset += text.len() + 1;
            let Ok(LineKind::Config { key, value }) = classify(text) else {
                panic!("{text:?} is not a config line");
            };
            builder.apply(&line, key, value)?;
        }
        Ok(builder.finish())
    }

    #[test]
    fn test_all_keys() {
        let config = apply_lines(
            ParseConfig::default(),
            &[
                "title: Tuesday Threshold",
                "Author: Coach Kim",
                "date: 2024-03-05",
                "description: Aerobic base",
                "LEVEL: Senior",
                "units: M",
                "course: Long",
            ],
        )
        .unwrap();

        assert_eq!(config.title(), Some("Tuesday Threshold"));
        assert_eq!(config.author(), Some("Coach Kim"));
        assert_eq!(config.date(), Some("2024-03-05"));
        assert_eq!(config.description(), Some("Aerobic base"));
        assert_eq!(config.level(), Some("Senior"));
        assert_eq!(config.units(), Units::Meters);
        assert_eq!(config.course(), Course::Long);
    }

    #[test]
    fn test_invalid_units_echoes_line() {
        let err = apply_lines(ParseConfig::default(), &["units: kilometers"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidUnits);
        assert_eq!(err.line_number(), 1);
        assert_eq!(err.line_text(), "units: kilometers");
        assert_eq!(err.labels()[0].span(), Span::new(7..17));
    }

    #[test]
    fn test_invalid_course() {
        let err = apply_lines(ParseConfig::default(), &["course: olympic"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCourse);
    }

    #[test]
    fn test_unknown_key_rejected_by_default() {
        let err = apply_lines(ParseConfig::default(), &["pool: Lane 4"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownConfigKey);
        assert_eq!(err.labels()[0].span(), Span::new(0..4));
        assert!(err.help().unwrap().contains("units"));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let options = ParseConfig::default().with_unknown_keys(UnknownKeyPolicy::Ignore);
        let config = apply_lines(options, &["pool: Lane 4", "title: Easy"]).unwrap();
        assert_eq!(config.title(), Some("Easy"));
    }

    #[test]
    fn test_duplicate_last_wins_by_default() {
        let config = apply_lines(
            ParseConfig::default(),
            &["title: Monday", "TITLE: Tuesday"],
        )
        .unwrap();
        assert_eq!(config.title(), Some("Tuesday"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let options = ParseConfig::default().with_duplicate_keys(DuplicateKeyPolicy::Reject);
        let err = apply_lines(options, &["title: Monday", "units: meters", "title: Tuesday"])
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DuplicateConfigKey);
        assert_eq!(err.line_number(), 3);
        assert_eq!(err.labels().len(), 2);
        assert_eq!(err.labels()[0].span(), Span::new(28..33));
        assert!(err.labels()[1].is_secondary());
        assert_eq!(err.labels()[1].span(), Span::new(0..5));
    }
}
