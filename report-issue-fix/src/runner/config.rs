//! Runner configuration.

use std::path::{Path, PathBuf};

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "report-issue.toml";

/// Configuration for running the reporter.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the reporter configuration file.
    config_path: PathBuf,
    /// Issue URL that wins over the file and the environment.
    issue_url: Option<String>,
    /// Whether to print the URL instead of opening it.
    dry_run: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CONFIG_FILE), false)
    }
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(config_path: PathBuf, dry_run: bool) -> Self {
        Self {
            config_path,
            issue_url: None,
            dry_run,
        }
    }

    /// Sets an issue URL overriding the configuration file.
    pub fn with_issue_url(mut self, issue_url: String) -> Self {
        self.issue_url = Some(issue_url);
        self
    }

    /// Returns the configuration file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the overriding issue URL, if any.
    pub fn issue_url(&self) -> Option<&str> {
        self.issue_url.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
