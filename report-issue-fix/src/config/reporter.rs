//! Reporter configuration deserialization and validation.

use crate::config::ConfigError;
use crate::diagnostics::fixable_diagnostic_ids;
use crate::issue_url::{IssueTarget, IssueUrlError};
use crate::templates::TemplateRenderer;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Issue tracker used when none is configured.
pub const DEFAULT_ISSUE_URL: &str = "https://github.com/dotnet/platform-compat/issues/new";

/// Environment variable overriding the configured issue URL.
pub const ISSUE_URL_ENV: &str = "REPORT_ISSUE_URL";

/// Parsed reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReporterConfig {
    /// New-issue endpoint of the tracker.
    #[serde(default = "default_issue_url")]
    pub issue_url: String,

    /// Diagnostic identifiers offered the report-issue fix.
    #[serde(default = "default_fixable_ids")]
    pub fixable_ids: Vec<String>,

    /// Handlebars template for the issue body (optional).
    #[serde(default)]
    pub body_template: Option<String>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            issue_url: default_issue_url(),
            fixable_ids: default_fixable_ids(),
            body_template: None,
        }
    }
}

pub fn default_issue_url() -> String {
    DEFAULT_ISSUE_URL.to_string()
}

pub fn default_fixable_ids() -> Vec<String> {
    fixable_diagnostic_ids()
        .iter()
        .map(|id| (*id).to_string())
        .collect()
}

impl ReporterConfig {
    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, or not
    /// valid TOML. The content is not validated; see [`Self::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading reporter configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Replaces values with those set in the environment.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(ISSUE_URL_ENV) {
            if !url.trim().is_empty() {
                debug!(url = %url, "Issue URL overridden from {}", ISSUE_URL_ENV);
                self.issue_url = url;
            }
        }
        self
    }

    /// Validates the configuration.
    ///
    /// `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the issue URL is invalid,
    /// an identifier is blank or repeated, or the body template does not
    /// compile.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();
        let invalid = |message: String| ConfigError::ValidationError {
            path: path_str.clone(),
            message,
        };

        IssueTarget::parse(&self.issue_url).map_err(|e| invalid(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for id in &self.fixable_ids {
            if id.trim().is_empty() {
                return Err(invalid("fixable-ids must not contain blank entries".to_string()));
            }
            if !seen.insert(id.as_str()) {
                return Err(invalid(format!("fixable-ids contains '{id}' more than once")));
            }
        }

        if let Some(template) = &self.body_template {
            TemplateRenderer::new()
                .check(template)
                .map_err(|e| invalid(format!("body-template: {e}")))?;
        }

        Ok(())
    }

    /// Returns the validated issue target.
    ///
    /// # Errors
    ///
    /// Returns [`IssueUrlError`] if the issue URL is invalid.
    pub fn target(&self) -> Result<IssueTarget, IssueUrlError> {
        IssueTarget::parse(&self.issue_url)
    }
}
