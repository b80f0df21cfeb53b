//! Explicit registry of code fixes, keyed by diagnostic identifier.

use crate::actions::ReportIssueAction;
use crate::diagnostics::Diagnostic;
use crate::issue_url::IssueTarget;
use crate::templates::TemplateRenderer;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Builds a fix for a diagnostic.
pub type FixFactory = Arc<dyn Fn(&Diagnostic) -> ReportIssueAction + Send + Sync>;

/// Maps diagnostic identifiers to the factories that build their fixes.
#[derive(Clone, Default)]
pub struct FixRegistry {
    order: Vec<String>,
    factories: HashMap<String, FixFactory>,
}

impl std::fmt::Debug for FixRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixRegistry")
            .field("ids", &self.order)
            .finish_non_exhaustive()
    }
}

impl FixRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry offering the report-issue fix for every id in `ids`.
    ///
    /// # Arguments
    ///
    /// * `target` - Where issues are reported
    /// * `ids` - Diagnostic identifiers to register
    /// * `body_template` - Optional Handlebars template for the issue body
    pub fn with_report_issue<I, S>(
        target: IssueTarget,
        ids: I,
        body_template: Option<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let factory: FixFactory = match body_template {
            Some(template) => {
                let renderer = Arc::new(TemplateRenderer::new());
                Arc::new(move |diagnostic: &Diagnostic| {
                    ReportIssueAction::with_body_template(
                        target.clone(),
                        diagnostic,
                        &renderer,
                        &template,
                    )
                })
            }
            None => Arc::new(move |diagnostic: &Diagnostic| {
                ReportIssueAction::new(target.clone(), diagnostic)
            }),
        };

        let mut registry = Self::new();
        for id in ids {
            registry.register(id, Arc::clone(&factory));
        }
        registry
    }

    /// Registers `factory` for `id`, replacing any earlier registration.
    pub fn register(&mut self, id: impl Into<String>, factory: FixFactory) {
        let id = id.into();
        if self.factories.insert(id.clone(), factory).is_none() {
            self.order.push(id);
        }
    }

    /// Returns the registered identifiers in registration order.
    #[must_use]
    pub fn fixable_ids(&self) -> &[String] {
        &self.order
    }

    /// Returns true if a fix is registered for `id`.
    #[must_use]
    pub fn is_fixable(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Builds the fix for a diagnostic, if its id is registered.
    #[must_use]
    pub fn fix_for(&self, diagnostic: &Diagnostic) -> Option<ReportIssueAction> {
        self.factories
            .get(&diagnostic.id)
            .map(|factory| factory(diagnostic))
    }

    /// Builds the fixes offered for a set of diagnostics at one location.
    ///
    /// Only the first diagnostic is considered.
    #[must_use]
    pub fn register_code_fixes(&self, diagnostics: &[Diagnostic]) -> Vec<ReportIssueAction> {
        let Some(diagnostic) = diagnostics.first() else {
            return Vec::new();
        };

        let fixes: Vec<_> = self.fix_for(diagnostic).into_iter().collect();
        debug!(id = %diagnostic.id, count = fixes.len(), "Registered code fixes");
        fixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::fixable_diagnostic_ids;

    const BASE: &str = "https://github.com/dotnet/platform-compat/issues/new";

    fn default_registry() -> FixRegistry {
        FixRegistry::with_report_issue(
            IssueTarget::parse(BASE).unwrap(),
            fixable_diagnostic_ids().iter().copied(),
            None,
        )
    }

    #[test]
    fn registers_all_ids_in_order() {
        let registry = default_registry();
        let ids: Vec<&str> = registry.fixable_ids().iter().map(String::as_str).collect();
        assert_eq!(ids, fixable_diagnostic_ids());
    }

    #[test]
    fn unknown_id_has_no_fix() {
        let registry = default_registry();
        assert!(!registry.is_fixable("CS0168"));
        assert!(registry.fix_for(&Diagnostic::new("CS0168", "unused")).is_none());
    }

    #[test]
    fn only_first_diagnostic_is_used() {
        let registry = default_registry();
        let fixes = registry.register_code_fixes(&[
            Diagnostic::new("PC002", "first"),
            Diagnostic::new("PC001", "second"),
        ]);

        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].title(), "PC002: first");

        let fixes = registry.register_code_fixes(&[
            Diagnostic::new("CS0168", "unknown"),
            Diagnostic::new("PC001", "known"),
        ]);
        assert!(fixes.is_empty());
    }

    #[test]
    fn empty_diagnostics_yield_no_fixes() {
        assert!(default_registry().register_code_fixes(&[]).is_empty());
    }

    #[tokio::test]
    async fn later_registration_replaces_earlier() {
        let mut registry = FixRegistry::new();
        let first = IssueTarget::parse("https://example.com/a/issues/new").unwrap();
        let second = IssueTarget::parse("https://example.com/b/issues/new").unwrap();

        registry.register(
            "X1",
            Arc::new(move |d: &Diagnostic| ReportIssueAction::new(first.clone(), d)),
        );
        registry.register(
            "X1",
            Arc::new(move |d: &Diagnostic| ReportIssueAction::new(second.clone(), d)),
        );

        assert_eq!(registry.fixable_ids(), ["X1".to_string()]);
        let fix = registry.fix_for(&Diagnostic::new("X1", "m")).unwrap();
        let operations = fix.compute_operations().await;
        assert!(operations[0].url().starts_with("https://example.com/b/issues/new?"));
    }

    #[test]
    fn body_template_applies_to_every_id() {
        let registry = FixRegistry::with_report_issue(
            IssueTarget::parse(BASE).unwrap(),
            ["PC001", "DE0004"],
            Some("Found {{id}}".to_string()),
        );

        let fix = registry.fix_for(&Diagnostic::new("DE0004", "m")).unwrap();
        assert_eq!(fix.report().body.as_deref(), Some("Found DE0004"));
    }
}
