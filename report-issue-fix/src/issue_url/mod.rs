//! Issue URL construction.
//!
//! Builds the URL of a GitHub "new issue" form with the title (and optionally
//! the body) pre-filled from a diagnostic.
//!
//! Query values are percent-encoded per RFC 3986: every byte outside the
//! unreserved set `A-Z a-z 0-9 - . _ ~` becomes `%XX` with uppercase hex.
//! A space is therefore `%20` (never `+`) and `:` is `%3A`.

mod error;
mod report;

pub use error::IssueUrlError;
pub use report::{issue_title, IssueReport};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;
use url::Url;

/// Bytes escaped in query values: everything except RFC 3986 unreserved characters.
pub const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a single query parameter value.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET).to_string()
}

/// Builds the new-issue URL for a diagnostic.
///
/// # Arguments
///
/// * `repository_base_url` - Issue creation endpoint (e.g. `.../issues/new`)
/// * `diagnostic_id` - Diagnostic identifier
/// * `diagnostic_message` - Rendered diagnostic message
///
/// # Errors
///
/// Returns [`IssueUrlError::InvalidArgument`] if the base URL is empty or is
/// not an `http`/`https` URL. The id and message are never rejected.
pub fn build_issue_url(
    repository_base_url: &str,
    diagnostic_id: &str,
    diagnostic_message: &str,
) -> Result<String, IssueUrlError> {
    let target = IssueTarget::parse(repository_base_url)?;
    Ok(target.issue_url(&IssueReport::new(issue_title(
        diagnostic_id,
        diagnostic_message,
    ))))
}

/// A validated issue creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTarget {
    base: String,
    has_query: bool,
}

impl IssueTarget {
    /// Validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`IssueUrlError::InvalidArgument`] if the URL is empty, contains
    /// whitespace or control characters, cannot be parsed, uses a scheme other
    /// than `http`/`https`, or has a fragment.
    pub fn parse(base_url: &str) -> Result<Self, IssueUrlError> {
        let base = base_url.trim();
        let invalid = |reason: &str| IssueUrlError::InvalidArgument {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };

        if base.is_empty() {
            return Err(invalid("URL is empty"));
        }
        // `Url::parse` silently escapes or strips these, but the base is emitted verbatim
        if base.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid("URL must not contain whitespace or control characters"));
        }

        let parsed = Url::parse(base).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(&format!(
                "unsupported scheme '{}', expected http or https",
                parsed.scheme()
            )));
        }
        if parsed.fragment().is_some() {
            return Err(invalid("URL must not contain a fragment"));
        }

        Ok(Self {
            base: base.to_string(),
            has_query: parsed.query().is_some(),
        })
    }

    /// Returns the base URL as given (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Builds the URL that pre-fills a new issue with `report`.
    #[must_use]
    pub fn issue_url(&self, report: &IssueReport) -> String {
        let mut url = self.base.clone();
        if !self.has_query {
            url.push('?');
        } else if !url.ends_with('?') && !url.ends_with('&') {
            url.push('&');
        }

        url.push_str("title=");
        url.push_str(&encode_query_value(&report.title));
        if let Some(body) = &report.body {
            url.push_str("&body=");
            url.push_str(&encode_query_value(body));
        }

        debug!(len = url.len(), "Built issue URL");
        url
    }
}

impl std::fmt::Display for IssueTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base)
    }
}
