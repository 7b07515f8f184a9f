//! Item line tokenizer.
//!
//! Reads the content of one workout line into raw, unvalidated fields:
//!
//! ```text
//! [ REPS "x" ] DISTANCE DESCRIPTION [ ("@" | "on") INTERVAL ] ( "[" FIELDS "]" )*
//! ```
//!
//! The bracketed variations use the same field parser as the base with every
//! field optional. Numbers are kept signed here; positivity is checked when
//! the fields are resolved into variants.

use winnow::{
    Parser as _,
    ascii::{Caseless, digit1, space0, space1},
    combinator::{alt, cut_err, eof, not, opt, peek, preceded, repeat, terminated},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, rest, take_till},
};

use crate::{
    error::{ErrorKind, LineError},
    span::{Span, Spanned},
};

/// Diagnostic information attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemDiagnostic {
    kind: ErrorKind,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<'a, O> = ModalResult<O, ContextError<ItemDiagnostic>>;

/// Which fields are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// The unbracketed base: distance and description are required.
    Base,
    /// A bracketed variation: every field is optional.
    Variant,
}

/// The raw fields of the base or of one bracketed variation.
///
/// Spans are relative to the start of the tokenized content.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct FieldTokens<'a> {
    pub reps: Option<Spanned<i64>>,
    pub distance: Option<Spanned<f64>>,
    pub description: Option<Spanned<&'a str>>,
    /// Interval text, possibly a `/`-separated list.
    pub interval: Option<Spanned<&'a str>>,
}

/// A tokenized item line: base fields plus its bracketed variations in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ItemTokens<'a> {
    pub base: FieldTokens<'a>,
    /// Each variation with the span of its brackets.
    pub brackets: Vec<Spanned<FieldTokens<'a>>>,
}

/// Fail without consuming input.
fn fail<O>(input: &Input<'_>, diagnostic: ItemDiagnostic) -> IResult<'static, O> {
    Err(ErrMode::Cut(ContextError::new().add_context(
        input,
        &input.checkpoint(),
        diagnostic,
    )))
}

/// Parse an integer literal's text, failing with `NumberOutOfRange` on overflow.
fn parse_number<T: std::str::FromStr>(
    input: &Input<'_>,
    text: &str,
    start: usize,
) -> IResult<'static, T> {
    match text.parse() {
        Ok(value) => Ok(value),
        Err(_) => fail(
            input,
            ItemDiagnostic {
                kind: ErrorKind::NumberOutOfRange,
                message: "Number is too large",
                help: None,
                start,
            },
        ),
    }
}

/// Parse a repetition count: an integer directly followed by `x` or `X`.
fn reps<'a>(input: &mut Input<'a>) -> IResult<'a, Spanned<i64>> {
    let (digits, range) = terminated((opt('-'), digit1).take(), one_of(['x', 'X']))
        .with_span()
        .parse_next(input)?;
    let value = parse_number(input, digits, range.start)?;
    space0.parse_next(input)?;
    Ok(Spanned::new(
        value,
        Span::new(range.start..range.start + digits.len()),
    ))
}

/// End of a numeric field: whitespace, `@`, a bracket, or end of input.
fn field_boundary<'a>(input: &mut Input<'a>) -> IResult<'a, ()> {
    alt((space1.void(), one_of(['@', '[', ']']).void(), eof.void())).parse_next(input)
}

/// Parse a distance: an integer or decimal literal, possibly negative.
fn distance<'a>(input: &mut Input<'a>) -> IResult<'a, Spanned<f64>> {
    let (text, range) = terminated(
        (opt('-'), digit1, opt(('.', digit1))).take(),
        peek(field_boundary),
    )
    .with_span()
    .parse_next(input)?;
    let value: f64 = parse_number(input, text, range.start)?;
    if !value.is_finite() {
        return fail(
            input,
            ItemDiagnostic {
                kind: ErrorKind::NumberOutOfRange,
                message: "Distance is too large",
                help: None,
                start: range.start,
            },
        );
    }
    Ok(Spanned::new(value, Span::new(range)))
}

/// `@`, or `on` followed by something that starts an interval.
fn interval_marker<'a>(input: &mut Input<'a>) -> IResult<'a, ()> {
    alt((
        '@'.void(),
        (
            Caseless("on"),
            space1,
            peek(one_of(|c: char| c.is_ascii_digit() || c == ':')),
        )
            .void(),
    ))
    .parse_next(input)
}

fn word<'a>(input: &mut Input<'a>) -> IResult<'a, &'a str> {
    take_till(1.., |c: char| {
        c.is_whitespace() || matches!(c, '[' | ']' | '@')
    })
    .parse_next(input)
}

/// Parse the description: words up to an interval marker, a bracket, or the end.
fn description<'a>(input: &mut Input<'a>) -> IResult<'a, Spanned<&'a str>> {
    let (text, range) = repeat::<_, _, (), _, _>(
        1..,
        preceded(not(interval_marker), terminated(word, space0)),
    )
    .take()
    .with_span()
    .parse_next(input)?;
    let text = text.trim_end();
    Ok(Spanned::new(text, Span::new(range.start..range.start + text.len())))
}

/// Parse an interval clause; the value is the raw text after the marker.
fn interval<'a>(input: &mut Input<'a>) -> IResult<'a, Spanned<&'a str>> {
    let start = input.current_token_start();
    interval_marker.parse_next(input)?;
    space0.parse_next(input)?;

    let (raw, range) = take_till(0.., ['[', ']']).with_span().parse_next(input)?;
    let text = raw.trim_end();
    if text.is_empty() {
        return fail(
            input,
            ItemDiagnostic {
                kind: ErrorKind::InvalidIntervalFormat,
                message: "Interval is missing after `@`",
                help: Some("write the send-off as `:SS`, `M:SS`, or `H:MM:SS`"),
                start,
            },
        );
    }
    Ok(Spanned::new(text, Span::new(range.start..range.start + text.len())))
}

/// Parse the fields of the base or of one variation.
fn fields<'a>(input: &mut Input<'a>, mode: Mode) -> IResult<'a, FieldTokens<'a>> {
    space0.parse_next(input)?;
    let reps = opt(reps).parse_next(input)?;
    let distance = opt(distance).parse_next(input)?;

    if mode == Mode::Base && distance.is_none() {
        return fail(
            input,
            ItemDiagnostic {
                kind: ErrorKind::MissingDistance,
                message: "Item has no distance",
                help: Some("start the item with a distance, as in `200 swim` or `4x50 kick`"),
                start: input.current_token_start(),
            },
        );
    }

    space0.parse_next(input)?;
    let description = opt(description).parse_next(input)?;

    if mode == Mode::Base && description.is_none() {
        return fail(
            input,
            ItemDiagnostic {
                kind: ErrorKind::MissingDescription,
                message: "Description cannot be empty",
                help: Some("describe the swim after the distance, as in `200 free`"),
                start: input.current_token_start(),
            },
        );
    }

    let interval = opt(interval).parse_next(input)?;

    Ok(FieldTokens {
        reps,
        distance,
        description,
        interval,
    })
}

/// Parse one `[...]` variation.
fn bracket<'a>(input: &mut Input<'a>) -> IResult<'a, Spanned<FieldTokens<'a>>> {
    let start = input.current_token_start();
    '['.parse_next(input)?;

    let tokens = cut_err(terminated(
        |i: &mut Input<'a>| fields(i, Mode::Variant),
        (space0, ']'),
    ))
    .context(ItemDiagnostic {
        kind: ErrorKind::UnbalancedBrackets,
        message: "Variation is not closed with `]`",
        help: Some("close each variation with `]`; variations cannot be nested"),
        start,
    })
    .parse_next(input)?;

    let end = input.current_token_start();
    space0.parse_next(input)?;
    Ok(Spanned::new(tokens, Span::new(start..end)))
}

/// Parse a complete item line.
fn item<'a>(input: &mut Input<'a>) -> IResult<'a, ItemTokens<'a>> {
    let base = fields(input, Mode::Base)?;
    let brackets = repeat(0.., bracket).parse_next(input)?;

    if !input.is_empty() {
        let start = input.current_token_start();
        let trailing = rest.parse_next(input)?;
        let diagnostic = if trailing.starts_with(']') {
            ItemDiagnostic {
                kind: ErrorKind::UnbalancedBrackets,
                message: "Closing `]` without a matching `[`",
                help: None,
                start,
            }
        } else {
            ItemDiagnostic {
                kind: ErrorKind::TrailingGarbage,
                message: "Unexpected text after the item",
                help: Some("only bracketed variations may follow the interval"),
                start,
            }
        };
        return fail(input, diagnostic);
    }

    Ok(ItemTokens { base, brackets })
}

/// Convert a winnow error into a line error relative to the content start.
fn convert_err_mode(err: ErrMode<ContextError<ItemDiagnostic>>, error_pos: usize) -> LineError {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    if let Some(ItemDiagnostic {
        kind,
        message,
        help,
        start,
    }) = context_error.context().next()
    {
        let mut err = LineError::new(*kind, *message, Span::new(*start..error_pos));
        if let Some(h) = help {
            err = err.with_help(*h);
        }
        return err;
    }

    LineError::new(
        ErrorKind::TrailingGarbage,
        "Unexpected text in item",
        Span::new(error_pos..error_pos),
    )
}

/// Tokenize the content of an item line.
///
/// Spans in the result and in errors are relative to the start of `content`.
pub(crate) fn tokenize(content: &str) -> Result<ItemTokens<'_>, LineError> {
    let mut input = LocatingSlice::new(content);
    item(&mut input).map_err(|e| {
        let error_pos = input.current_token_start();
        convert_err_mode(e, error_pos)
    })
}
