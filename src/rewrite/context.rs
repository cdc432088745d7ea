//! Per-document state threaded through the rewrite.

use crate::types::Unit;

/// What the rewriter knows about the document it is in the middle of.
#[derive(Debug, Default)]
pub struct ParseContext {
    /// Unit of the document, fixed by the root element
    pub unit: Unit,
    /// One entry per open element: the name to close it with, when it was renamed
    closing_overrides: Vec<Option<&'static str>>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// True before the root element has been opened.
    pub fn at_root(&self) -> bool {
        self.closing_overrides.is_empty()
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.closing_overrides.len()
    }

    /// Record an opened element, with the name its end tag must use if it was renamed.
    pub fn open(&mut self, closing_override: Option<&'static str>) {
        self.closing_overrides.push(closing_override);
    }

    /// Close the innermost element, returning its override.
    ///
    /// An end tag with no matching open element has no override.
    pub fn close(&mut self) -> Option<&'static str> {
        self.closing_overrides.pop().flatten()
    }
}
