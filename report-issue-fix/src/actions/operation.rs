//! Operations produced by code actions.

use crate::opener::UrlOpener;
use tracing::{info, warn};

/// A side effect a host applies once the user picks a code action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeOperation {
    /// Open a URL with the default handler.
    OpenUrl {
        /// The URL to open.
        url: String,
    },
}

impl CodeOperation {
    /// Applies the operation.
    ///
    /// Opening is fire-and-forget: a failure is logged and otherwise ignored,
    /// so a missing browser never reaches the host.
    pub fn apply(&self, opener: &dyn UrlOpener) {
        match self {
            Self::OpenUrl { url } => match opener.open(url) {
                Ok(()) => info!(url = %url, "Opened issue URL"),
                Err(e) => warn!(error = %e, "Could not open issue URL"),
            },
        }
    }

    /// Returns the URL this operation opens.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::OpenUrl { url } => url,
        }
    }
}
