//! Opening URLs with the operating system's default handler.

mod error;
mod recording;

pub use error::OpenError;
pub use recording::RecordingUrlOpener;

use std::sync::Arc;
use tracing::debug;

/// Capability to open a URL outside the process.
pub trait UrlOpener: Send + Sync {
    /// Opens `url`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenError`] if the URL could not be handed off.
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

impl<T: UrlOpener + ?Sized> UrlOpener for Arc<T> {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        (**self).open(url)
    }
}

/// Opens URLs with the platform's default handler (usually the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        debug!(url, "Opening URL with system handler");
        open::that(url).map_err(|source| OpenError::Launch {
            url: url.to_string(),
            source,
        })
    }
}
