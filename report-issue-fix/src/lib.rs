#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod actions;
pub mod config;
pub mod diagnostics;
pub mod issue_url;
pub mod opener;
pub mod registry;
pub mod runner;
pub mod templates;

pub use actions::{CodeOperation, ReportIssueAction, REPORT_ISSUE_EQUIVALENCE_KEY};
pub use config::{resolve_config, ConfigError, ReporterConfig};
pub use diagnostics::{fixable_diagnostic_ids, Diagnostic, SourceSpan, FIXABLE_DIAGNOSTIC_IDS};
pub use issue_url::{
    build_issue_url, encode_query_value, issue_title, IssueReport, IssueTarget, IssueUrlError,
};
pub use opener::{OpenError, RecordingUrlOpener, SystemUrlOpener, UrlOpener};
pub use registry::{FixFactory, FixRegistry};
pub use runner::{ReportOutcome, Runner, RunnerConfig, RunnerError};
pub use templates::{TemplateError, TemplateRenderer};
