//! Issue report information.

use crate::diagnostics::Diagnostic;

/// Formats the issue title for a diagnostic: `"{id}: {message}"`.
#[must_use]
pub fn issue_title(diagnostic_id: &str, diagnostic_message: &str) -> String {
    format!("{diagnostic_id}: {diagnostic_message}")
}

/// The content pre-filled into a new issue form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    /// Issue title.
    pub title: String,

    /// Rendered issue body, if a body template is configured.
    pub body: Option<String>,
}

impl IssueReport {
    /// Creates a report with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
        }
    }

    /// Creates a title-only report for a diagnostic.
    #[must_use]
    pub fn for_diagnostic(diagnostic: &Diagnostic) -> Self {
        Self::new(issue_title(&diagnostic.id, &diagnostic.message))
    }

    /// Sets the issue body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
