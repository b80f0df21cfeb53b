//! Issue URL error types.

use thiserror::Error;

/// Errors that can occur while building an issue URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueUrlError {
    /// The repository base URL cannot host a new-issue query.
    #[error("Invalid issue base URL '{url}': {reason}")]
    InvalidArgument { url: String, reason: String },
}
