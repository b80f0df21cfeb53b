//! Diagnostics consumed from the analyzers.
//!
//! The analyzers themselves live elsewhere; this module only carries the
//! shape of what they report and the identifiers this crate knows how to fix.

mod diagnostic;
mod ids;

pub use diagnostic::{Diagnostic, SourceSpan};
pub use ids::{fixable_diagnostic_ids, FIXABLE_DIAGNOSTIC_IDS};
