//! Error types with rich diagnostics using miette
//!
//! Tokenizer failures carry source spans so a broken document points at the
//! offending byte.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// A zero-width span at `offset`, clamped to the end of the source.
    pub fn span_at(&self, offset: usize) -> SourceSpan {
        (offset.min(self.source.len()), 0).into()
    }
}

/// Everything that can stop a transformation.
#[derive(Error, Diagnostic, Debug)]
pub enum WaggleError {
    #[error("malformed markup: {message}")]
    #[diagnostic(code(waggly::xml::malformed))]
    Xml {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("tokenizer stopped here")]
        span: SourceSpan,
    },

    #[error("cannot read {path}")]
    #[diagnostic(
        code(waggly::io::read),
        help("check that the file exists and is readable")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resample an empty point sequence")]
    #[diagnostic(
        code(waggly::wobble::empty_sequence),
        help("a shape needs at least one point before it can wobble")
    )]
    EmptyPointSequence,

    #[error("unexpected {event} event outside of a document")]
    #[diagnostic(code(waggly::rewrite::out_of_order))]
    OutOfOrderEvent { event: &'static str },

    #[error("event stream ended without an end-of-document event")]
    #[diagnostic(code(waggly::rewrite::unterminated))]
    Unterminated,
}

impl WaggleError {
    /// Build an [`WaggleError::Xml`] pointing at `offset` inside `ctx`.
    pub fn xml(ctx: &SourceContext, message: impl Into<String>, offset: usize) -> Self {
        WaggleError::Xml {
            message: message.into(),
            src: ctx.named_source(),
            span: ctx.span_at(offset),
        }
    }
}
