//! Diagnostic information.

use serde::Serialize;

/// Location of a diagnostic within its source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    /// Offset of the first character covered by the diagnostic.
    pub start: usize,

    /// Number of characters covered.
    pub length: usize,
}

impl SourceSpan {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Offset one past the last covered character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }
}

/// A diagnostic reported by an analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable rule identifier (e.g., "PC001").
    pub id: String,

    /// Rendered, human-readable message.
    pub message: String,

    /// Where the diagnostic was raised.
    pub span: SourceSpan,
}

impl Diagnostic {
    /// Creates a diagnostic with an empty span.
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            span: SourceSpan::default(),
        }
    }

    /// Sets the source span.
    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }
}
