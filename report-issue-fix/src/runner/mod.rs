//! Reports a diagnostic end to end: configuration, fix lookup, URL opening.

mod config;
mod error;
mod outcome;

pub use config::{RunnerConfig, DEFAULT_CONFIG_FILE};
pub use error::RunnerError;
pub use outcome::ReportOutcome;

use crate::config::{resolve_config, ReporterConfig};
use crate::diagnostics::Diagnostic;
use crate::opener::{SystemUrlOpener, UrlOpener};
use crate::registry::FixRegistry;
use tracing::{info, info_span, Instrument};

/// Reports diagnostics as issues.
pub struct Runner {
    registry: FixRegistry,
    opener: Box<dyn UrlOpener>,
    dry_run: bool,
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("registry", &self.registry)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl Runner {
    /// Creates a runner from a [`RunnerConfig`], opening URLs with the system handler.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the configuration cannot be loaded or the
    /// issue URL is invalid.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let reporter = resolve_config(config.config_path(), config.issue_url())?;
        Self::from_reporter_config(reporter, config.dry_run())
    }

    /// Creates a runner from an already loaded [`ReporterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::IssueUrl`] if the issue URL is invalid.
    pub fn from_reporter_config(
        reporter: ReporterConfig,
        dry_run: bool,
    ) -> Result<Self, RunnerError> {
        let target = reporter.target()?;
        let registry =
            FixRegistry::with_report_issue(target, reporter.fixable_ids, reporter.body_template);

        Ok(Self {
            registry,
            opener: Box::new(SystemUrlOpener),
            dry_run,
        })
    }

    /// Replaces the URL opener.
    #[must_use]
    pub fn with_opener(mut self, opener: Box<dyn UrlOpener>) -> Self {
        self.opener = opener;
        self
    }

    /// Returns the fix registry.
    pub fn registry(&self) -> &FixRegistry {
        &self.registry
    }

    /// Reports a diagnostic.
    ///
    /// Opening the URL is fire-and-forget, so an opener failure still yields
    /// [`ReportOutcome::Requested`].
    pub async fn report(&self, diagnostic: &Diagnostic) -> ReportOutcome {
        let span = info_span!("report", id = %diagnostic.id);

        async {
            let Some(action) = self
                .registry
                .register_code_fixes(std::slice::from_ref(diagnostic))
                .into_iter()
                .next()
            else {
                info!("No fix registered for diagnostic");
                return ReportOutcome::NotFixable {
                    id: diagnostic.id.clone(),
                };
            };

            let mut outcome = None;
            for operation in action.compute_operations().await {
                let url = operation.url().to_string();
                if self.dry_run {
                    info!(url = %url, "Dry run, not opening");
                    outcome = Some(ReportOutcome::DryRun { url });
                } else {
                    operation.apply(self.opener.as_ref());
                    outcome = Some(ReportOutcome::Requested { url });
                }
            }

            outcome.unwrap_or(ReportOutcome::NotFixable {
                id: diagnostic.id.clone(),
            })
        }
        .instrument(span)
        .await
    }
}
