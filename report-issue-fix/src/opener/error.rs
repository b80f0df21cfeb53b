//! URL opener error types.

use thiserror::Error;

/// Errors that can occur while handing a URL to the operating system.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The OS launcher could not be started or reported failure.
    #[error("Failed to open '{url}': {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The opener refused the URL.
    #[error("Refused to open '{url}': {reason}")]
    Refused { url: String, reason: String },
}
