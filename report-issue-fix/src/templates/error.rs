//! Template error types.

/// Errors from compiling or rendering an issue body template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// The template does not compile.
    #[error("Template syntax error: {0}")]
    SyntaxError(#[from] handlebars::TemplateError),
}
