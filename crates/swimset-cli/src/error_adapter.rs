//! Error adapter for converting SwimsetError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use swimset::SwimsetError;
use swimset_parser::error::Diagnostic;

/// Adapter for a single parse diagnostic.
///
/// This adapter wraps a [`Diagnostic`] and implements [`MietteDiagnostic`]
/// to render the offending line with its labels.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {})",
            self.diag.message(),
            self.diag.line_number()
        )
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.diag.kind().code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for non-diagnostic [`SwimsetError`] variants.
pub struct ErrorAdapter<'a>(pub &'a SwimsetError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SwimsetError::Io(_) => "swimset::io",
            SwimsetError::Parse { .. } => return None,
            SwimsetError::Export(_) => "swimset::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a swimset [`Span`](swimset_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: swimset_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`SwimsetError`] into a reportable error.
pub fn to_reportable(err: &SwimsetError) -> Reportable<'_> {
    match err {
        SwimsetError::Parse {
            err: parse_err,
            src,
        } => Reportable::Diagnostic(DiagnosticAdapter::new(parse_err.diagnostic(), src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use swimset::PracticeBuilder;
    use swimset_parser::{Span, error::ErrorKind};

    use super::*;

    fn parse_error(source: &str) -> SwimsetError {
        PracticeBuilder::default()
            .parse(source)
            .expect_err("source should not parse")
    }

    #[test]
    fn test_parse_error_is_a_diagnostic() {
        let err = parse_error("Warmup:\n  4x50 kick @ 1:60");

        match to_reportable(&err) {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "Invalid interval format (line 2)");
                assert_eq!(
                    d.code().map(|c| c.to_string()),
                    Some(ErrorKind::InvalidIntervalFormat.code().to_string())
                );
                assert!(d.help().is_some());
                assert!(d.source_code().is_some());
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_non_parse_error() {
        let err = SwimsetError::Io(std::io::Error::other("disk on fire"));

        match to_reportable(&err) {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "I/O error: disk on fire");
                assert_eq!(e.code().map(|c| c.to_string()).as_deref(), Some("swimset::io"));
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_all_labels_returned() {
        let diag = Diagnostic::new(ErrorKind::DuplicateConfigKey, "duplicate", 2, "title: B")
            .with_label(Span::new(9..14), "set again here")
            .with_secondary_label(Span::new(0..5), "first set here");

        let adapter = DiagnosticAdapter::new(&diag, "title: A\ntitle: B");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("set again here"));
        assert!(labels[0].primary());
        assert_eq!(labels[1].label(), Some("first set here"));
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_config_after_set_points_at_first_header() {
        let source = "Warmup:\n  200 swim\ntitle: Late";
        let err = parse_error(source);

        let Reportable::Diagnostic(d) = to_reportable(&err) else {
            panic!("Expected Diagnostic");
        };
        let labels: Vec<_> = d.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].offset(), 0);
        assert_eq!(labels[1].len(), "Warmup:".len());
    }
}
