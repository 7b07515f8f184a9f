//! Line classification.
//!
//! Every source line is classified on its own, without knowledge of the
//! lines around it. Whether a classified line is allowed where it appears
//! (configuration after a set, an item before any set) is decided by the
//! assembler.

use std::num::NonZeroU32;

use crate::{
    error::{ErrorKind, LineError},
    span::{Span, Spanned},
};

/// What a single source line holds.
///
/// All spans are relative to the start of the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LineKind<'a> {
    Blank,
    /// A whole-line comment; the text after `#`, trimmed.
    Comment(Spanned<&'a str>),
    /// A non-indented `key: value` pair.
    Config {
        key: Spanned<&'a str>,
        value: Spanned<&'a str>,
    },
    SetHeader {
        name: Spanned<&'a str>,
        repeat_count: NonZeroU32,
        comment: Option<Spanned<&'a str>>,
    },
    /// An indented workout line with comment and indentation removed.
    Item {
        content: Spanned<&'a str>,
        comment: Option<Spanned<&'a str>>,
    },
}

/// Classify one line of source text.
pub(crate) fn classify(text: &str) -> Result<LineKind<'_>, LineError> {
    let start = text.len() - text.trim_start().len();
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Ok(LineKind::Blank);
    }

    if let Some(rest) = trimmed.strip_prefix('#') {
        return Ok(LineKind::Comment(trimmed_slice(text, start + 1, start + 1 + rest.len())));
    }

    let (content_end, comment) = split_comment(text);
    let content = trimmed_slice(text, start, content_end);
    let indented = start > 0;

    if !indented {
        if let Some((key, value)) = config_pair(text, content) {
            return Ok(LineKind::Config { key, value });
        }
    }

    if content.inner().ends_with(':') {
        return set_header(text, content, comment);
    }

    if indented {
        return Ok(LineKind::Item { content, comment });
    }

    Err(LineError::new(
        ErrorKind::UnrecognizedLine,
        "Line is not a set header, a configuration line, or an indented item",
        content.span(),
    )
    .with_help("indent workout items under a set header such as `Main Set:`"))
}

/// Slice `text[start..end]`, trimmed, with the span of the trimmed part.
fn trimmed_slice(text: &str, start: usize, end: usize) -> Spanned<&str> {
    let raw = &text[start..end];
    let lead = raw.len() - raw.trim_start().len();
    let value = raw.trim();
    Spanned::new(value, Span::new(start + lead..start + lead + value.len()))
}

/// Find a trailing comment: a `#` preceded by whitespace and outside brackets.
///
/// Returns the end of the content and the trimmed comment text, if any.
fn split_comment(text: &str) -> (usize, Option<Spanned<&str>>) {
    let mut depth = 0usize;
    let mut prev_is_space = false;

    for (index, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '#' if depth == 0 && prev_is_space => {
                let comment = trimmed_slice(text, index + 1, text.len());
                let comment = (!comment.inner().is_empty()).then_some(comment);
                return (index, comment);
            }
            _ => {}
        }
        prev_is_space = c.is_whitespace();
    }

    (text.len(), None)
}

/// Recognize `word: value` where `word` is letters, digits, or underscores
/// and `value` is not empty.
fn config_pair<'a>(
    text: &'a str,
    content: Spanned<&'a str>,
) -> Option<(Spanned<&'a str>, Spanned<&'a str>)> {
    let (key, _) = content.inner().split_once(':')?;
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let key_start = content.span().start();
    let value = trimmed_slice(text, key_start + key.len() + 1, content.span().end());
    if value.inner().is_empty() {
        return None;
    }

    let key = Spanned::new(key, Span::new(key_start..key_start + key.len()));
    Some((key, value))
}

/// Read a `NAME [xN]:` header from content ending in `:`.
fn set_header<'a>(
    text: &'a str,
    content: Spanned<&'a str>,
    comment: Option<Spanned<&'a str>>,
) -> Result<LineKind<'a>, LineError> {
    let start = content.span().start();
    let body = trimmed_slice(text, start, content.span().end() - 1);

    let (name, repeat_count) = match repeat_suffix(body.inner()) {
        Some(suffix_at) => {
            let suffix_start = body.span().start() + suffix_at;
            let suffix = &text[suffix_start + 1..body.span().end()];
            let suffix_span = Span::new(suffix_start..body.span().end());
            let count = repeat_count(suffix, suffix_span)?;
            (trimmed_slice(text, body.span().start(), suffix_start), count)
        }
        None => (body, NonZeroU32::MIN),
    };

    if name.inner().is_empty() {
        return Err(LineError::new(
            ErrorKind::MissingSetName,
            "Set header has no name",
            content.span(),
        )
        .with_help("name the set before the colon, as in `Main Set x2:`"));
    }

    Ok(LineKind::SetHeader {
        name,
        repeat_count,
        comment,
    })
}

/// Byte position of a final `xN` word in a header body, if there is one.
///
/// The word must be `x` or `X` directly followed by a digit or a sign, so
/// names such as `Relax` or `Drill xtra` are left alone.
fn repeat_suffix(body: &str) -> Option<usize> {
    let word_start = body
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let word = &body[word_start..];
    let mut chars = word.chars();

    match (chars.next(), chars.next()) {
        (Some('x' | 'X'), Some(c)) if c.is_ascii_digit() || c == '-' || c == '+' => {
            Some(word_start)
        }
        _ => None,
    }
}

fn repeat_count(digits: &str, span: Span) -> Result<NonZeroU32, LineError> {
    let invalid = || {
        LineError::new(
            ErrorKind::InvalidRepeatCount,
            format!("Repeat count `x{digits}` must be a positive whole number"),
            span,
        )
        .with_help("write the repeat count as `x2`, `x3`, ...")
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let count: u32 = digits.parse().map_err(|_| {
        LineError::new(
            ErrorKind::NumberOutOfRange,
            format!("Repeat count `x{digits}` is too large"),
            span,
        )
    })?;

    NonZeroU32::new(count).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(text: &str) -> (String, u32, Option<String>) {
        match classify(text) {
            Ok(LineKind::SetHeader {
                name,
                repeat_count,
                comment,
            }) => (
                name.inner().to_string(),
                repeat_count.get(),
                comment.map(|c| c.inner().to_string()),
            ),
            other => panic!("expected header for {text:?}, got {other:?}"),
        }
    }

    fn error_kind(text: &str) -> ErrorKind {
        classify(text).expect_err("expected an error").kind
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(classify("").unwrap(), LineKind::Blank);
        assert_eq!(classify("   \t").unwrap(), LineKind::Blank);

        let LineKind::Comment(text) = classify("  # easy day").unwrap() else {
            panic!("expected comment");
        };
        assert_eq!(*text.inner(), "easy day");
        assert_eq!(text.span(), Span::new(4..12));
    }

    #[test]
    fn test_config_line() {
        let LineKind::Config { key, value } = classify("units: meters").unwrap() else {
            panic!("expected config");
        };
        assert_eq!(*key.inner(), "units");
        assert_eq!(key.span(), Span::new(0..5));
        assert_eq!(*value.inner(), "meters");
        assert_eq!(value.span(), Span::new(7..13));
    }

    #[test]
    fn test_config_value_without_space() {
        let LineKind::Config { value, .. } = classify("title:Morning").unwrap() else {
            panic!("expected config");
        };
        assert_eq!(*value.inner(), "Morning");
    }

    #[test]
    fn test_header() {
        assert_eq!(header("Warmup:"), ("Warmup".to_string(), 1, None));
        assert_eq!(header("Main Set x3:"), ("Main Set".to_string(), 3, None));
        assert_eq!(header("Main Set X2 :"), ("Main Set".to_string(), 2, None));
        assert_eq!(
            header("Kick Set:  # with fins"),
            ("Kick Set".to_string(), 1, Some("with fins".to_string()))
        );
    }

    #[test]
    fn test_header_names_ending_in_x_words() {
        assert_eq!(header("Relax:"), ("Relax".to_string(), 1, None));
        assert_eq!(header("Drill xtra:"), ("Drill xtra".to_string(), 1, None));
    }

    #[test]
    fn test_header_with_wide_whitespace() {
        assert_eq!(
            header("Main\u{00A0}Set:"),
            ("Main\u{00A0}Set".to_string(), 1, None)
        );
        assert_eq!(
            header("Main Set\u{3000}x2:"),
            ("Main Set".to_string(), 2, None)
        );
    }

    #[test]
    fn test_invalid_repeat_count() {
        assert_eq!(error_kind("Main Set x0:"), ErrorKind::InvalidRepeatCount);
        assert_eq!(error_kind("Main Set x-2:"), ErrorKind::InvalidRepeatCount);
        assert_eq!(error_kind("Main Set x3a:"), ErrorKind::InvalidRepeatCount);
        assert_eq!(
            error_kind("Main Set x99999999999:"),
            ErrorKind::NumberOutOfRange
        );
    }

    #[test]
    fn test_missing_set_name() {
        assert_eq!(error_kind(":"), ErrorKind::MissingSetName);
        assert_eq!(error_kind("x3:"), ErrorKind::MissingSetName);
    }

    #[test]
    fn test_item_line() {
        let LineKind::Item { content, comment } =
            classify("    4x50 kick @ :55 [3x50 kick]  # fins").unwrap()
        else {
            panic!("expected item");
        };
        assert_eq!(*content.inner(), "4x50 kick @ :55 [3x50 kick]");
        assert_eq!(content.span(), Span::new(4..31));
        assert_eq!(comment.map(|c| *c.inner()), Some("fins"));
    }

    #[test]
    fn test_hash_inside_brackets_is_not_a_comment() {
        let LineKind::Item { content, comment } =
            classify("  4x50 kick [3x50 drill # 2] # note").unwrap()
        else {
            panic!("expected item");
        };
        assert_eq!(*content.inner(), "4x50 kick [3x50 drill # 2]");
        assert_eq!(comment.map(|c| *c.inner()), Some("note"));
    }

    #[test]
    fn test_hash_without_space_is_content() {
        let LineKind::Item { content, comment } = classify("  100 swim#1").unwrap() else {
            panic!("expected item");
        };
        assert_eq!(*content.inner(), "100 swim#1");
        assert!(comment.is_none());
    }

    #[test]
    fn test_indented_key_value_is_item() {
        assert!(matches!(
            classify("  title: x").unwrap(),
            LineKind::Item { .. }
        ));
    }

    #[test]
    fn test_unrecognized_top_level_line() {
        let err = classify("200 swim").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnrecognizedLine);
        assert_eq!(err.span, Span::new(0..8));
    }
}
