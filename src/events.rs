//! Markup events, produced by a streaming pass over the document.
//!
//! [`Tokenizer`] wraps `quick-xml` and turns its events into the handful the
//! rewriter cares about. Self-closing elements are reported as a start event
//! followed by an end event. Comments, declarations, processing instructions
//! and doctypes are dropped.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;

use crate::errors::{SourceContext, WaggleError};
use crate::log::{trace, warn};
use crate::rewrite::tag::{Attribute, NamespaceBinding, StartTag};

/// One event of the document stream, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgEvent {
    StartDocument,
    StartElement(StartTag),
    /// Entity-decoded character data (CDATA included).
    Characters(String),
    EndElement {
        name: String,
        prefix: Option<String>,
    },
    EndDocument,
}

impl SvgEvent {
    /// Short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SvgEvent::StartDocument => "start-document",
            SvgEvent::StartElement(_) => "start-element",
            SvgEvent::Characters(_) => "characters",
            SvgEvent::EndElement { .. } => "end-element",
            SvgEvent::EndDocument => "end-document",
        }
    }
}

/// Pull-based event source over a markup string.
///
/// Yields `StartDocument`, the element/character events, then `EndDocument`.
/// Iteration stops after the first error.
pub struct Tokenizer<'a> {
    name: String,
    source: &'a str,
    reader: Reader<&'a [u8]>,
    started: bool,
    finished: bool,
    open_elements: usize,
    pending: Option<SvgEvent>,
}

impl<'a> Tokenizer<'a> {
    /// `name` labels diagnostics (a file name, or `<input>`).
    pub fn new(name: impl Into<String>, source: &'a str) -> Self {
        Tokenizer {
            name: name.into(),
            source,
            reader: Reader::from_str(source),
            started: false,
            finished: false,
            open_elements: 0,
            pending: None,
        }
    }

    fn error(&self, message: impl Into<String>) -> WaggleError {
        let ctx = SourceContext::new(self.name.clone(), self.source);
        WaggleError::xml(&ctx, message, self.reader.buffer_position())
    }

    /// Next interesting event from the reader, `None` at end of input.
    fn read(&mut self) -> Result<Option<SvgEvent>, WaggleError> {
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => return Err(self.error(e.to_string())),
            };

            match event {
                Event::Start(e) => {
                    self.open_elements += 1;
                    return Ok(Some(SvgEvent::StartElement(self.start_tag(&e)?)));
                }
                Event::Empty(e) => {
                    let tag = self.start_tag(&e)?;
                    self.pending = Some(SvgEvent::EndElement {
                        name: tag.name.clone(),
                        prefix: tag.prefix.clone(),
                    });
                    return Ok(Some(SvgEvent::StartElement(tag)));
                }
                Event::End(e) => {
                    self.open_elements = self.open_elements.saturating_sub(1);
                    let (prefix, name) = split_name(e.name());
                    return Ok(Some(SvgEvent::EndElement { name, prefix }));
                }
                Event::Text(e) => {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        // undeclared entities such as `&nbsp;` are kept as written
                        Err(err) => {
                            warn!(%err, "keeping text with an unknown entity verbatim");
                            lossy(&e).into_owned()
                        }
                    };
                    return Ok(Some(SvgEvent::Characters(text)));
                }
                Event::CData(e) => {
                    return Ok(Some(SvgEvent::Characters(lossy(&e).into_owned())));
                }
                Event::Eof if self.open_elements > 0 => {
                    return Err(self.error(format!(
                        "input ended with {} unclosed element(s)",
                        self.open_elements
                    )));
                }
                Event::Eof => return Ok(None),
                other => {
                    trace!(event = ?other, "skipping markup");
                }
            }
        }
    }

    fn start_tag(&self, e: &BytesStart<'_>) -> Result<StartTag, WaggleError> {
        let (prefix, name) = split_name(e.name());
        let mut tag = StartTag {
            name,
            prefix,
            ..StartTag::default()
        };

        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.error(err.to_string()))?;
            let key = lossy(attr.key.as_ref()).into_owned();
            let value = lossy(&attr.value).into_owned();

            if key == "xmlns" {
                tag.namespaces.push(NamespaceBinding {
                    prefix: None,
                    uri: value,
                });
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                tag.namespaces.push(NamespaceBinding {
                    prefix: Some(prefix.to_string()),
                    uri: value,
                });
            } else {
                tag.attributes.push(Attribute { name: key, value });
            }
        }

        Ok(tag)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<SvgEvent, WaggleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(SvgEvent::StartDocument));
        }
        if let Some(event) = self.pending.take() {
            return Some(Ok(event));
        }

        match self.read() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.finished = true;
                Some(Ok(SvgEvent::EndDocument))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn split_name(name: QName<'_>) -> (Option<String>, String) {
    let prefix = name.prefix().map(|p| lossy(p.as_ref()).into_owned());
    let local = lossy(name.local_name().as_ref()).into_owned();
    (prefix, local)
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
