//! Group variation resolution.
//!
//! Turns the raw fields of an item line into one validated [`Variant`] per
//! group. A bracketed variation inherits every field it leaves out from the
//! base fields, never from another bracket.

use std::num::NonZeroU32;

use log::trace;
use swimset_core::{
    duration::Duration,
    semantic::{Distance, Variant},
};

use crate::{
    error::{ErrorKind, LineError},
    interval::parse_interval,
    span::Span,
    tokenizer::{FieldTokens, ItemTokens},
};

/// Fill the fields a variation leaves out with the base's fields.
pub(crate) fn merge<'a>(base: &FieldTokens<'a>, variation: &FieldTokens<'a>) -> FieldTokens<'a> {
    FieldTokens {
        reps: variation.reps.or(base.reps),
        distance: variation.distance.or(base.distance),
        description: variation.description.or(base.description),
        interval: variation.interval.or(base.interval),
    }
}

/// Resolve an item line into its base variant and one variant per bracket.
///
/// Fails with `TooManyGroups` when the line defines more than `max_groups`
/// groups.
pub(crate) fn resolve(
    tokens: &ItemTokens<'_>,
    max_groups: usize,
) -> Result<(Variant, Vec<Variant>), LineError> {
    if let Some(excess) = tokens.brackets.get(max_groups.saturating_sub(1)) {
        let last = tokens.brackets.last().map_or(excess.span(), |b| b.span());
        return Err(LineError::new(
            ErrorKind::TooManyGroups,
            format!(
                "Item defines {} groups but at most {max_groups} are allowed",
                tokens.brackets.len() + 1
            ),
            excess.span().union(last),
        )
        .with_label("extra variations")
        .with_help("groups are labeled A to Z; remove the extra bracketed variations"));
    }

    let base = variant(&tokens.base)?;
    let variations = tokens
        .brackets
        .iter()
        .map(|bracket| variant(&merge(&tokens.base, bracket.inner())))
        .collect::<Result<Vec<_>, _>>()?;

    trace!(groups = variations.len() + 1; "Resolved item");
    Ok((base, variations))
}

/// Validate fully merged fields into a variant.
fn variant(fields: &FieldTokens<'_>) -> Result<Variant, LineError> {
    let reps = match fields.reps {
        None => NonZeroU32::MIN,
        Some(reps) => {
            let value = *reps.inner();
            if value <= 0 {
                return Err(LineError::new(
                    ErrorKind::NonPositiveReps,
                    "Repetitions must be positive",
                    reps.span(),
                ));
            }
            u32::try_from(value)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| {
                    LineError::new(
                        ErrorKind::NumberOutOfRange,
                        "Repetition count is too large",
                        reps.span(),
                    )
                })?
        }
    };

    let distance = fields.distance.ok_or_else(|| {
        LineError::new(
            ErrorKind::MissingDistance,
            "Item has no distance",
            Span::default(),
        )
    })?;
    let distance = Distance::new(*distance.inner()).ok_or_else(|| {
        LineError::new(
            ErrorKind::NonPositiveDistance,
            "Distance must be positive",
            distance.span(),
        )
    })?;

    let description = fields.description.ok_or_else(|| {
        LineError::new(
            ErrorKind::MissingDescription,
            "Description cannot be empty",
            Span::default(),
        )
    })?;

    let intervals = match fields.interval {
        Some(interval) => intervals(interval.inner(), interval.span())?,
        None => Vec::new(),
    };

    Ok(Variant::new(
        reps,
        distance,
        *description.inner(),
        intervals,
    ))
}

/// Parse a `/`-separated interval list; `span` locates `text` in the line.
fn intervals(text: &str, span: Span) -> Result<Vec<Duration>, LineError> {
    let mut offset = span.start();
    text.split('/')
        .map(|piece| {
            let lead = piece.len() - piece.trim_start().len();
            let piece_span = Span::new(offset + lead..offset + lead + piece.trim().len());
            offset += piece.len() + 1;

            parse_interval(piece).map_err(|e| {
                LineError::new(
                    ErrorKind::InvalidIntervalFormat,
                    "Invalid interval format",
                    piece_span,
                )
                .with_label(e.to_string())
                .with_help("use `:SS`, `M:SS`, or `H:MM:SS`, as in `:55`, `1:30`, or `1:02:30`")
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use swimset_core::group::GroupLabel;

    use super::*;
    use crate::{span::Spanned, tokenizer::tokenize};

    fn resolved(content: &str) -> (Variant, Vec<Variant>) {
        let tokens = tokenize(content).unwrap();
        resolve(&tokens, 26).unwrap_or_else(|e| panic!("{content:?} failed: {e:?}"))
    }

    fn resolve_error(content: &str) -> LineError {
        let tokens = tokenize(content).unwrap();
        resolve(&tokens, 26).expect_err("expected an error")
    }

    fn at(value: &str) -> Option<Spanned<&str>> {
        Some(Spanned::new(value, Span::default()))
    }

    #[test]
    fn test_merge_prefers_variation_fields() {
        let base = FieldTokens {
            reps: Some(Spanned::new(4, Span::default())),
            distance: Some(Spanned::new(50.0, Span::default())),
            description: at("kick"),
            interval: at(":55"),
        };
        let variation = FieldTokens {
            reps: Some(Spanned::new(3, Span::default())),
            interval: at("1:00"),
            ..FieldTokens::default()
        };

        let merged = merge(&base, &variation);
        assert_eq!(merged.reps.map(|s| *s.inner()), Some(3));
        assert_eq!(merged.distance.map(|s| *s.inner()), Some(50.0));
        assert_eq!(merged.description.map(|s| *s.inner()), Some("kick"));
        assert_eq!(merged.interval.map(|s| *s.inner()), Some("1:00"));
    }

    #[test]
    fn test_merge_empty_variation_is_base() {
        let base = FieldTokens {
            reps: None,
            distance: Some(Spanned::new(200.0, Span::default())),
            description: at("swim"),
            interval: None,
        };
        assert_eq!(merge(&base, &FieldTokens::default()), base);
    }

    #[test]
    fn test_zero_brackets_is_base_only() {
        let (base, variations) = resolved("200 swim @ 3:00");
        assert!(variations.is_empty());
        assert_eq!(base.reps(), 1);
        assert_eq!(base.distance().value(), 200.0);
        assert_eq!(base.description(), "swim");
        assert_eq!(base.interval(), Some(Duration::from_secs(180)));
    }

    #[test]
    fn test_interval_only_bracket_inherits_everything_else() {
        let (base, variations) = resolved("4x50 kick @ :55 [@ 1:00]");
        let b = &variations[0];
        assert_eq!(b.reps(), base.reps());
        assert_eq!(b.distance(), base.distance());
        assert_eq!(b.description(), base.description());
        assert_eq!(b.interval(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_bracket_without_interval_inherits_base_interval() {
        let (_, variations) = resolved("6x100 free @ 1:30 [4x100]");
        assert_eq!(variations[0].reps(), 4);
        assert_eq!(variations[0].interval(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_siblings_do_not_inherit_from_each_other() {
        let (_, variations) = resolved("4x50 kick @ :55 [3x50 drill] [@ 1:10]");
        let c = &variations[1];
        assert_eq!(c.reps(), 4);
        assert_eq!(c.description(), "kick");
        assert_eq!(c.interval(), Some(Duration::from_secs(70)));
    }

    #[test]
    fn test_interval_list() {
        let (base, _) = resolved("3x50 kick @ :55/1:10");
        assert_eq!(
            base.intervals(),
            &[Duration::from_secs(55), Duration::from_secs(70)]
        );
        assert_eq!(base.interval(), Some(Duration::from_secs(55)));
    }

    #[test]
    fn test_non_positive_values() {
        assert_eq!(resolve_error("0 swim").kind, ErrorKind::NonPositiveDistance);
        assert_eq!(resolve_error("-5 swim").kind, ErrorKind::NonPositiveDistance);
        assert_eq!(resolve_error("0x50 swim").kind, ErrorKind::NonPositiveReps);
        assert_eq!(resolve_error("-2x50 swim").kind, ErrorKind::NonPositiveReps);
        assert_eq!(
            resolve_error("4x50 kick [0 kick]").kind,
            ErrorKind::NonPositiveDistance
        );
    }

    #[test]
    fn test_reps_above_u32_are_out_of_range() {
        assert_eq!(
            resolve_error("9999999999x50 swim").kind,
            ErrorKind::NumberOutOfRange
        );
    }

    #[test]
    fn test_invalid_interval_span() {
        let err = resolve_error("4x50 kick @ 1:00/ 1:60");
        assert_eq!(err.kind, ErrorKind::InvalidIntervalFormat);
        assert_eq!(err.message, "Invalid interval format");
        assert_eq!(err.span, Span::new(18..22));
    }

    #[test]
    fn test_invalid_bracket_interval() {
        assert_eq!(
            resolve_error("200 swim [150 swim @ 60]").kind,
            ErrorKind::InvalidIntervalFormat
        );
    }

    #[test]
    fn test_too_many_groups() {
        let tokens = tokenize("100 swim [@ 1:00] [@ 1:10] [@ 1:20]").unwrap();
        let err = resolve(&tokens, 3).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooManyGroups);
        assert_eq!(err.span, Span::new(27..35));

        assert!(resolve(&tokens, 4).is_ok());
    }

    #[test]
    fn test_group_label_limit() {
        let content = format!("100 swim{}", " [@ 1:00]".repeat(GroupLabel::COUNT));
        let tokens = tokenize(&content).unwrap();
        assert_eq!(
            resolve(&tokens, GroupLabel::COUNT).unwrap_err().kind,
            ErrorKind::TooManyGroups
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::tokenizer::tokenize;

    fn description_strategy() -> impl Strategy<Value = String> {
        "[a-z]{1,8}( [a-z]{1,8}){0,2}"
    }

    /// An item with no brackets resolves to exactly its own fields.
    fn check_zero_brackets_identity(
        reps: u32,
        distance: u32,
        description: &str,
    ) -> Result<(), TestCaseError> {
        let content = format!("{reps}x{distance} {description}");
        let tokens = tokenize(&content).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
        let (base, variations) =
            resolve(&tokens, 26).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;

        prop_assert!(variations.is_empty());
        prop_assert_eq!(base.reps(), reps);
        prop_assert_eq!(base.distance().value(), f64::from(distance));
        prop_assert_eq!(base.description(), description);
        Ok(())
    }

    /// A bracket holding only an interval changes nothing but the interval.
    fn check_interval_bracket_inherits(
        reps: u32,
        distance: u32,
        description: &str,
        secs: u64,
    ) -> Result<(), TestCaseError> {
        let interval = Duration::from_secs(secs);
        let content = format!("{reps}x{distance} {description} @ 1:00 [@ {interval}]");
        let tokens = tokenize(&content).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
        let (base, variations) =
            resolve(&tokens, 26).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;

        prop_assert_eq!(variations.len(), 1);
        let b = &variations[0];
        prop_assert_eq!(b.reps(), base.reps());
        prop_assert_eq!(b.distance(), base.distance());
        prop_assert_eq!(b.description(), base.description());
        prop_assert_eq!(b.interval(), Some(interval));
        Ok(())
    }

    proptest! {
        #[test]
        fn zero_brackets_identity(
            reps in 1u32..100,
            distance in 1u32..2000,
            description in description_strategy(),
        ) {
            check_zero_brackets_identity(reps, distance, &description)?;
        }

        #[test]
        fn interval_bracket_inherits(
            reps in 1u32..100,
            distance in 1u32..2000,
            description in description_strategy(),
            secs in 0u64..7200,
        ) {
            check_interval_bracket_inherits(reps, distance, &description, secs)?;
        }
    }
}
