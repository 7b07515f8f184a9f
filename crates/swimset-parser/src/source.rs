//! Splitting practice text into numbered source lines.

use crate::{
    error::{Diagnostic, LineError},
    span::Span,
};

/// One line of practice source.
///
/// `text` excludes the line terminator (`\n`, and a trailing `\r` when the
/// file uses `\r\n`). `offset` is the byte position of the line's first
/// character in the full source; spans produced while reading a line are
/// relative to the line and are moved to absolute positions through
/// [`SourceLine::span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
    number: usize,
    text: &'a str,
    offset: usize,
}

impl<'a> SourceLine<'a> {
    pub(crate) fn new(number: usize, text: &'a str, offset: usize) -> Self {
        Self {
            number,
            text,
            offset,
        }
    }

    /// 1-based line number.
    pub(crate) fn number(&self) -> usize {
        self.number
    }

    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    /// Convert a line-relative span to a span into the full source.
    pub(crate) fn span(&self, local: Span) -> Span {
        local.shift(self.offset)
    }

    /// Span covering the whole line, without its terminator.
    pub(crate) fn full_span(&self) -> Span {
        Span::new(self.offset..self.offset + self.text.len())
    }

    /// Attach this line's number, text, and position to a line-relative error.
    pub(crate) fn diagnostic(&self, err: LineError) -> Diagnostic {
        let LineError {
            kind,
            message,
            label,
            span,
            help,
        } = err;
        let mut diag =
            Diagnostic::new(kind, message, self.number, self.text).with_label(self.span(span), label);
        if let Some(help) = help {
            diag = diag.with_help(help);
        }
        diag
    }
}

/// Iterate the lines of `source` with their numbers and byte offsets.
pub(crate) fn lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source
        .split('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let line = SourceLine::new(index + 1, raw.strip_suffix('\r').unwrap_or(raw), offset);
            offset += raw.len() + 1;
            line
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_track_offsets() {
        let source = "units: meters\nWarmup:\n  200 swim";
        let lines: Vec<_> = lines(source).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].number(), 2);
        assert_eq!(lines[1].text(), "Warmup:");
        assert_eq!(lines[2].full_span().to_range(), 22..32);
        assert_eq!(&source[lines[2].full_span().to_range()], "  200 swim");
    }

    #[test]
    fn test_crlf_is_stripped() {
        let source = "Warmup:\r\n  200 swim\r\n";
        let lines: Vec<_> = lines(source).collect();

        assert_eq!(lines[0].text(), "Warmup:");
        assert_eq!(lines[1].text(), "  200 swim");
        assert_eq!(&source[lines[1].full_span().to_range()], "  200 swim");
    }

    #[test]
    fn test_span_is_made_absolute() {
        let line = SourceLine::new(3, "  4x50 kick", 40);
        assert_eq!(line.span(Span::new(2..6)), Span::new(42..46));
    }
}
