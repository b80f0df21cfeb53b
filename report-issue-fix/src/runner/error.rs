//! Runner error types.

/// Errors that can occur while setting up the reporter.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The issue URL is unusable.
    #[error(transparent)]
    IssueUrl(#[from] crate::issue_url::IssueUrlError),
}
