//! The report-issue code action.
//!
//! For a diagnostic, offers a fix whose only effect is opening a new-issue
//! form with the diagnostic pre-filled.

mod operation;

pub use operation::CodeOperation;

use crate::diagnostics::Diagnostic;
use crate::issue_url::{IssueReport, IssueTarget};
use crate::templates::TemplateRenderer;
use tracing::{debug, warn};

/// Key shared by every report-issue action.
pub const REPORT_ISSUE_EQUIVALENCE_KEY: &str = "Report an issue";

/// Code action that reports a diagnostic as an issue.
#[derive(Debug, Clone)]
pub struct ReportIssueAction {
    target: IssueTarget,
    report: IssueReport,
}

impl ReportIssueAction {
    /// Creates an action that reports `diagnostic` to `target`.
    #[must_use]
    pub fn new(target: IssueTarget, diagnostic: &Diagnostic) -> Self {
        Self {
            target,
            report: IssueReport::for_diagnostic(diagnostic),
        }
    }

    /// Creates an action whose issue body is rendered from `body_template`.
    ///
    /// A template that fails to render is logged and the issue is reported
    /// with a title only.
    #[must_use]
    pub fn with_body_template(
        target: IssueTarget,
        diagnostic: &Diagnostic,
        renderer: &TemplateRenderer,
        body_template: &str,
    ) -> Self {
        let mut action = Self::new(target, diagnostic);
        match renderer.render_issue_body(body_template, diagnostic) {
            Ok(body) => action.report = action.report.with_body(body),
            Err(e) => warn!(id = %diagnostic.id, error = %e, "Ignoring issue body template"),
        }
        action
    }

    /// Title shown in the host's fix menu, `"{id}: {message}"`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.report.title
    }

    /// Key used by hosts to group equivalent actions.
    #[must_use]
    pub fn equivalence_key(&self) -> &'static str {
        REPORT_ISSUE_EQUIVALENCE_KEY
    }

    /// The issue content this action pre-fills.
    #[must_use]
    pub fn report(&self) -> &IssueReport {
        &self.report
    }

    /// Computes the operations to apply when the action is chosen.
    pub async fn compute_operations(&self) -> Vec<CodeOperation> {
        let url = self.target.issue_url(&self.report);
        debug!(title = %self.report.title, "Computed report-issue operation");
        vec![CodeOperation::OpenUrl { url }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opener::RecordingUrlOpener;

    const BASE: &str = "https://github.com/dotnet/platform-compat/issues/new";

    fn action_for(id: &str, message: &str) -> ReportIssueAction {
        ReportIssueAction::new(
            IssueTarget::parse(BASE).unwrap(),
            &Diagnostic::new(id, message),
        )
    }

    #[test]
    fn title_and_key() {
        let action = action_for("PC001", "Avoid Process.Start");
        assert_eq!(action.title(), "PC001: Avoid Process.Start");
        assert_eq!(action.equivalence_key(), "Report an issue");
        assert_eq!(action_for("PC002", "x").equivalence_key(), action.equivalence_key());
    }

    #[tokio::test]
    async fn computes_single_open_url_operation() {
        let action = action_for("PC001", "Avoid Process.Start");
        let operations = action.compute_operations().await;

        assert_eq!(
            operations,
            vec![CodeOperation::OpenUrl {
                url: format!("{BASE}?title=PC001%3A%20Avoid%20Process.Start"),
            }]
        );
    }

    #[tokio::test]
    async fn applying_opens_url() {
        let action = action_for("PC003", "Not in UWP");
        let opener = RecordingUrlOpener::new();

        for operation in action.compute_operations().await {
            operation.apply(&opener);
        }

        assert_eq!(opener.opened(), vec![format!("{BASE}?title=PC003%3A%20Not%20in%20UWP")]);
    }

    #[tokio::test]
    async fn open_failure_is_swallowed() {
        let action = action_for("PC001", "x");
        let opener = RecordingUrlOpener::failing("no browser installed");

        let operations = action.compute_operations().await;
        operations[0].apply(&opener);

        assert_eq!(opener.opened().len(), 1);
        assert_eq!(opener.opened()[0], operations[0].url());
    }

    #[tokio::test]
    async fn body_template_is_rendered() {
        let renderer = TemplateRenderer::new();
        let action = ReportIssueAction::with_body_template(
            IssueTarget::parse(BASE).unwrap(),
            &Diagnostic::new("PC001", "x"),
            &renderer,
            "Rule {{id}}",
        );

        assert_eq!(action.report().body.as_deref(), Some("Rule PC001"));
        let operations = action.compute_operations().await;
        assert!(operations[0].url().ends_with("&body=Rule%20PC001"));
    }

    #[test]
    fn broken_body_template_falls_back_to_title() {
        let renderer = TemplateRenderer::new();
        let action = ReportIssueAction::with_body_template(
            IssueTarget::parse(BASE).unwrap(),
            &Diagnostic::new("PC001", "x"),
            &renderer,
            "{{unknown}}",
        );

        assert_eq!(action.report().body, None);
        assert_eq!(action.title(), "PC001: x");
    }
}
