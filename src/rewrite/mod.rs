//! The streaming rewriter
//!
//! This module is organized into submodules:
//! - `context`: ParseContext, the per-document state (unit, pending end-tag renames)
//! - `rules`: one rewrite rule per shape kind
//! - `tag`: the start-tag model and its serialization
//!
//! [`Rewriter`] consumes [`SvgEvent`]s one at a time and appends the rewritten
//! markup to a buffer that is handed back on end-of-document.

pub mod context;
pub mod rules;
pub mod tag;

pub use context::ParseContext;
pub use rules::Rewritten;

use rand::RngCore;

use crate::classify::{RewriteRule, classify};
use crate::config::Config;
use crate::errors::WaggleError;
use crate::events::{SvgEvent, Tokenizer};
use crate::log::debug;
use crate::types::Unit;
use tag::{escape_text, qualified_name};

/// Where the rewriter is in the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    InDocument,
}

/// Event-driven rewriter for one document at a time.
pub struct Rewriter<'a> {
    config: &'a Config,
    rng: &'a mut dyn RngCore,
    state: State,
    context: ParseContext,
    output: String,
}

impl<'a> Rewriter<'a> {
    pub fn new(config: &'a Config, rng: &'a mut dyn RngCore) -> Self {
        Rewriter {
            config,
            rng,
            state: State::Idle,
            context: ParseContext::new(),
            output: String::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Feed one event. Returns the finished document on `EndDocument`.
    pub fn handle(&mut self, event: SvgEvent) -> Result<Option<String>, WaggleError> {
        match (self.state, event) {
            (_, SvgEvent::StartDocument) => {
                self.output.clear();
                self.context = ParseContext::new();
                self.state = State::InDocument;
            }
            (State::Idle, other) => {
                return Err(WaggleError::OutOfOrderEvent {
                    event: other.kind(),
                });
            }
            (State::InDocument, SvgEvent::StartElement(tag)) => {
                if self.context.at_root() {
                    self.context.unit = Unit::from_width(tag.attribute("width"));
                    debug!(unit = %self.context.unit, root = %tag.name, "document unit");
                }
                let rewritten = self.rewrite(&tag)?;
                self.output.push_str(&rewritten.markup);
                self.context.open(rewritten.rename);
            }
            (State::InDocument, SvgEvent::Characters(text)) => {
                let text = text.trim();
                if !text.is_empty() {
                    self.output.push_str(&escape_text(text));
                }
            }
            (State::InDocument, SvgEvent::EndElement { name, prefix }) => {
                let closing = self.context.close().unwrap_or(name.as_str());
                self.output.push_str("</");
                self.output
                    .push_str(&qualified_name(prefix.as_deref(), closing));
                self.output.push('>');
            }
            (State::InDocument, SvgEvent::EndDocument) => {
                self.state = State::Idle;
                return Ok(Some(std::mem::take(&mut self.output)));
            }
        }
        Ok(None)
    }

    fn rewrite(&mut self, tag: &tag::StartTag) -> Result<Rewritten, WaggleError> {
        let rule = classify(tag, self.config.font_family().is_some());
        debug!(element = %tag.name, ?rule, "rewriting");

        let wobble = self.config.wobble(self.context.unit);
        match rule {
            RewriteRule::Poly => rules::rewrite_poly(tag, &wobble, self.rng),
            RewriteRule::Line => rules::rewrite_line(tag, &wobble, self.rng),
            RewriteRule::Rect => rules::rewrite_rect(tag, &wobble, self.rng),
            RewriteRule::Path => rules::rewrite_path(tag, &wobble, self.rng),
            RewriteRule::Text => Ok(rules::rewrite_text(
                tag,
                self.config.font_family().unwrap_or_default(),
                self.config.font_size(),
            )),
            RewriteRule::PassThrough => Ok(rules::pass_through(tag)),
        }
    }
}

/// Run `source` through a fresh [`Rewriter`] and return the rewritten markup.
///
/// `name` labels diagnostics.
pub fn rewrite_document(
    name: &str,
    source: &str,
    config: &Config,
    rng: &mut dyn RngCore,
) -> Result<String, WaggleError> {
    let mut rewriter = Rewriter::new(config, rng);
    for event in Tokenizer::new(name, source) {
        if let Some(output) = rewriter.handle(event?)? {
            return Ok(output);
        }
    }
    Err(WaggleError::Unterminated)
}
