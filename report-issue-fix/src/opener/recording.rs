//! URL opener that records instead of launching anything.

use super::{OpenError, UrlOpener};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`UrlOpener`] that remembers every URL it was asked to open.
///
/// Useful wherever launching a browser is undesirable, such as tests.
#[derive(Debug, Default)]
pub struct RecordingUrlOpener {
    opened: Mutex<Vec<String>>,
    failure: Option<String>,
}

impl RecordingUrlOpener {
    /// Creates an opener that accepts every URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an opener that records every URL and then fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            opened: Mutex::default(),
            failure: Some(reason.into()),
        }
    }

    /// Returns the URLs requested so far, in order.
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.opened.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UrlOpener for RecordingUrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        self.lock().push(url.to_string());
        match &self.failure {
            Some(reason) => Err(OpenError::Refused {
                url: url.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}
