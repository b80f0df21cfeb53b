//! Template renderer.

use crate::diagnostics::Diagnostic;
use crate::issue_url::issue_title;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a Handlebars registry for issue bodies.
///
/// HTML escaping is off (issue bodies are markdown) and strict mode is on, so
/// a misspelled variable fails instead of rendering empty.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders issue body templates for diagnostics.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer").finish_non_exhaustive()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Checks that a template compiles without rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::SyntaxError`] for malformed templates.
    pub fn check(&self, template: &str) -> Result<(), super::TemplateError> {
        handlebars::Template::compile(template)?;
        Ok(())
    }

    /// Renders an issue body for a diagnostic.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed or references an
    /// unknown variable.
    pub fn render_issue_body(
        &self,
        template: &str,
        diagnostic: &Diagnostic,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "id": diagnostic.id,
            "message": diagnostic.message,
            "title": issue_title(&diagnostic.id, &diagnostic.message),
            "span_start": diagnostic.span.start,
            "span_length": diagnostic.span.length,
            "span_end": diagnostic.span.end(),
        });

        self.render_template(template, &data)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SourceSpan;

    fn sample_diagnostic() -> Diagnostic {
        Diagnostic::new("PC001", "Avoid Process.Start").with_span(SourceSpan::new(120, 13))
    }

    #[test]
    fn can_render_body() {
        let renderer = TemplateRenderer::new();
        let body = renderer
            .render_issue_body(
                "{{title}} ({{span_start}}..{{span_end}}, {{span_length}} chars)",
                &sample_diagnostic(),
            )
            .unwrap();

        assert_eq!(body, "PC001: Avoid Process.Start (120..133, 13 chars)");
    }

    #[test]
    fn can_render_builtin_conditionals() {
        let renderer = TemplateRenderer::new();
        let template = "{{#if span_length}}at {{span_start}}{{else}}no location{{/if}}";

        let body = renderer
            .render_issue_body(template, &sample_diagnostic())
            .unwrap();
        assert_eq!(body, "at 120");

        let body = renderer
            .render_issue_body(template, &Diagnostic::new("PC002", "x"))
            .unwrap();
        assert_eq!(body, "no location");
    }

    #[test]
    fn no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let diagnostic = Diagnostic::new("DE0001", "Use <T> & \"quotes\"");

        let body = renderer.render_issue_body("{{message}}", &diagnostic).unwrap();
        assert_eq!(body, "Use <T> & \"quotes\"");
    }

    #[test]
    fn strict_mode_rejects_unknown_variables() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render_issue_body("{{file_name}}", &sample_diagnostic());
        assert!(matches!(result, Err(crate::templates::TemplateError::RenderError(_))));
    }

    #[test]
    fn check_rejects_malformed_template() {
        let renderer = TemplateRenderer::new();
        assert!(renderer.check("{{#if id}}unclosed").is_err());
        assert!(renderer.check("{{id}}").is_ok());
    }
}
