//! Report outcome types.

use serde::Serialize;

/// Result of reporting a single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// The issue URL was handed to the opener.
    Requested {
        /// The issue URL.
        url: String,
    },

    /// Dry run; the URL was built but not opened.
    DryRun {
        /// The issue URL.
        url: String,
    },

    /// No fix is registered for the diagnostic.
    NotFixable {
        /// The diagnostic identifier.
        id: String,
    },
}

impl ReportOutcome {
    /// Returns the issue URL, if one was built.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Requested { url } | Self::DryRun { url } => Some(url),
            Self::NotFixable { .. } => None,
        }
    }

    /// Returns true if a fix was available.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        !matches!(self, Self::NotFixable { .. })
    }
}
