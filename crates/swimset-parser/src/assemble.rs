//! Set assembly.
//!
//! Walks the classified lines in order and groups item lines under the set
//! header above them:
//!
//! ```text
//!                 config line                  header
//!                 ┌────────┐                  ┌──────┐
//!                 ▼        │                  ▼      │
//! ──▶ BeforeFirstSet ──────┴─── header ──▶ InSet ────┘
//!        │                                  │
//!        └─ item: ItemOutsideSet            └─ config line: ConfigAfterSet
//! ```

use std::num::NonZeroU32;

use log::{debug, trace};
use swimset_core::semantic::{Item, Practice, Set};

use crate::{
    classify::{LineKind, classify},
    error::{ErrorKind, LineError, Result},
    metadata::MetadataBuilder,
    options::ParseConfig,
    resolve::resolve,
    source::SourceLine,
    span::{Span, Spanned},
    tokenizer::tokenize,
};

/// A set whose header has been read and whose items are being collected.
#[derive(Debug)]
struct OpenSet {
    name: String,
    repeat_count: NonZeroU32,
    header_comment: Vec<String>,
    items: Vec<Item>,
}

impl OpenSet {
    fn close(self) -> Set {
        let header_comment = (!self.header_comment.is_empty()).then(|| self.header_comment.join("\n"));
        Set::new(self.name, self.repeat_count, header_comment, self.items)
    }
}

#[derive(Debug)]
enum State {
    BeforeFirstSet,
    InSet {
        set: OpenSet,
        /// Span of the first header in the file.
        first_header: Span,
    },
}

/// Builds a [`Practice`] from source lines fed in order.
#[derive(Debug)]
pub(crate) struct Assembler {
    max_groups: usize,
    metadata: MetadataBuilder,
    state: State,
    sets: Vec<Set>,
}

impl Assembler {
    pub(crate) fn new(options: &ParseConfig) -> Self {
        Self {
            max_groups: options.max_groups(),
            metadata: MetadataBuilder::new(options),
            state: State::BeforeFirstSet,
            sets: Vec::new(),
        }
    }

    /// Read the next line.
    pub(crate) fn push(&mut self, line: &SourceLine<'_>) -> Result<()> {
        let kind = classify(line.text()).map_err(|e| line.diagnostic(e))?;
        trace!(line = line.number(), kind:? = kind; "Classified line");

        match kind {
            LineKind::Blank => Ok(()),
            LineKind::Comment(text) => {
                self.comment(text);
                Ok(())
            }
            LineKind::Config { key, value } => self.config(line, key, value),
            LineKind::SetHeader {
                name,
                repeat_count,
                comment,
            } => {
                self.header(line, name, repeat_count, comment);
                Ok(())
            }
            LineKind::Item { content, comment } => self.item(line, content, comment),
        }
    }

    /// Close the last set and return the practice.
    pub(crate) fn finish(mut self) -> Practice {
        if let State::InSet { set, .. } = self.state {
            self.sets.push(set.close());
        }
        Practice::new(self.metadata.finish(), self.sets)
    }

    /// Comments before the first item of a set belong to its header.
    fn comment(&mut self, text: Spanned<&str>) {
        if let State::InSet { set, .. } = &mut self.state {
            if set.items.is_empty() && !text.inner().is_empty() {
                set.header_comment.push(text.inner().to_string());
            }
        }
    }

    fn config(
        &mut self,
        line: &SourceLine<'_>,
        key: Spanned<&str>,
        value: Spanned<&str>,
    ) -> Result<()> {
        match &self.state {
            State::BeforeFirstSet => self.metadata.apply(line, key, value),
            State::InSet { first_header, .. } => Err(line
                .diagnostic(
                    LineError::new(
                        ErrorKind::ConfigAfterSet,
                        format!(
                            "Configuration `{}` must come before the first set",
                            key.inner()
                        ),
                        key.span().union(value.span()),
                    )
                    .with_help("move configuration lines to the top of the file"),
                )
                .with_secondary_label(*first_header, "first set starts here")),
        }
    }

    fn header(
        &mut self,
        line: &SourceLine<'_>,
        name: Spanned<&str>,
        repeat_count: NonZeroU32,
        comment: Option<Spanned<&str>>,
    ) {
        debug!(name = name.inner(), repeat_count = repeat_count.get(), line = line.number(); "Set started");

        let set = OpenSet {
            name: name.inner().to_string(),
            repeat_count,
            header_comment: comment.map(|c| c.inner().to_string()).into_iter().collect(),
            items: Vec::new(),
        };

        let previous = std::mem::replace(&mut self.state, State::BeforeFirstSet);
        self.state = match previous {
            State::BeforeFirstSet => State::InSet {
                set,
                first_header: line.full_span(),
            },
            State::InSet {
                set: open,
                first_header,
            } => {
                self.sets.push(open.close());
                State::InSet { set, first_header }
            }
        };
    }

    fn item(
        &mut self,
        line: &SourceLine<'_>,
        content: Spanned<&str>,
        comment: Option<Spanned<&str>>,
    ) -> Result<()> {
        let State::InSet { set, .. } = &mut self.state else {
            return Err(line.diagnostic(
                LineError::new(
                    ErrorKind::ItemOutsideSet,
                    "Item found outside of any set",
                    content.span(),
                )
                .with_help("add a set header such as `Warmup:` above this line"),
            ));
        };

        let offset = content.span().start();
        let tokens = tokenize(content.inner()).map_err(|e| line.diagnostic(e.shift(offset)))?;
        let (base, variations) =
            resolve(&tokens, self.max_groups).map_err(|e| line.diagnostic(e.shift(offset)))?;

        set.items.push(Item::new(
            line.number(),
            comment.map(|c| c.inner().to_string()),
            base,
            variations,
        ));
        Ok(())
    }
}
