//! Reporter configuration.
//!
//! The configuration names the issue tracker that receives reports, the
//! diagnostics that offer the fix, and an optional issue body template:
//!
//! ```toml
//! issue-url = "https://github.com/dotnet/platform-compat/issues/new"
//! fixable-ids = ["PC001", "PC002"]
//! body-template = "Reported from {{id}} at offset {{span_start}}"
//! ```
//!
//! Every key is optional. The `REPORT_ISSUE_URL` environment variable takes
//! precedence over `issue-url`.

mod error;
mod reporter;

pub use error::ConfigError;
pub use reporter::{
    default_fixable_ids, default_issue_url, ReporterConfig, DEFAULT_ISSUE_URL, ISSUE_URL_ENV,
};

use std::path::Path;
use tracing::{debug, info};

/// Loads, applies overrides to, and validates a configuration.
///
/// A missing file yields the default configuration. The issue URL comes from
/// `issue_url` if given, then the environment, then the file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed,
/// or if the resulting configuration is invalid.
pub fn resolve_config(
    path: &Path,
    issue_url: Option<&str>,
) -> Result<ReporterConfig, ConfigError> {
    let config = match ReporterConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::MissingFile { .. }) => {
            debug!(path = %path.display(), "No config file, using defaults");
            ReporterConfig::default()
        }
        Err(e) => return Err(e),
    };

    let mut config = config.with_env_overrides();
    if let Some(issue_url) = issue_url {
        config.issue_url = issue_url.to_string();
    }
    config.validate(path)?;

    info!(
        issue_url = %config.issue_url,
        fixable_ids = config.fixable_ids.len(),
        "Resolved reporter configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        temp_env::with_var_unset(ISSUE_URL_ENV, || {
            let temp = TempDir::new().unwrap();
            let config = resolve_config(&temp.path().join("report-issue.toml"), None).unwrap();

            assert_eq!(config.issue_url, DEFAULT_ISSUE_URL);
            assert_eq!(config.fixable_ids, default_fixable_ids());
            assert_eq!(config.body_template, None);
        });
    }

    #[test]
    fn directory_path_is_an_io_error() {
        temp_env::with_var_unset(ISSUE_URL_ENV, || {
            let temp = TempDir::new().unwrap();
            let result = resolve_config(temp.path(), None);
            assert!(matches!(result, Err(ConfigError::IoError { .. })));
        });
    }

    #[test]
    fn env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report-issue.toml");
        fs::write(
            &path,
            r#"issue-url = "https://github.com/acme/widgets/issues/new""#,
        )
        .unwrap();

        temp_env::with_var(ISSUE_URL_ENV, Some("https://git.example.com/issues/new"), || {
            let config = resolve_config(&path, None).unwrap();
            assert_eq!(config.issue_url, "https://git.example.com/issues/new");

            let config = resolve_config(&path, Some("https://cli.example.com/issues/new")).unwrap();
            assert_eq!(config.issue_url, "https://cli.example.com/issues/new");
        });
    }

    #[test]
    fn invalid_env_url_is_rejected() {
        temp_env::with_var(ISSUE_URL_ENV, Some("ftp://x"), || {
            let temp = TempDir::new().unwrap();
            let result = resolve_config(&temp.path().join("missing.toml"), None);
            assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        });
    }

    #[test]
    fn unreadable_toml_is_an_error() {
        temp_env::with_var_unset(ISSUE_URL_ENV, || {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("report-issue.toml");
            fs::write(&path, "issue-url = ").unwrap();

            let result = resolve_config(&path, None);
            assert!(matches!(result, Err(ConfigError::TomlError { .. })));
        });
    }
}
