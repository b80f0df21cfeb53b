//! Identifiers of the diagnostics that can be reported as issues.

/// Diagnostic identifiers offered the report-issue fix, in registration order.
///
/// Exception analyzer first, then the modern SDK and .NET Framework 4.6.1
/// analyzers, then every deprecated-API descriptor.
pub const FIXABLE_DIAGNOSTIC_IDS: &[&str] = &[
    "PC001", "PC003", "PC002", "DE0001", "DE0002", "DE0003", "DE0004", "DE0005", "DE0006",
    "DE0007", "DE0008", "DE0009",
];

/// Returns the fixable diagnostic identifiers.
#[must_use]
pub fn fixable_diagnostic_ids() -> &'static [&'static str] {
    FIXABLE_DIAGNOSTIC_IDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let unique: HashSet<_> = fixable_diagnostic_ids().iter().collect();
        assert_eq!(unique.len(), FIXABLE_DIAGNOSTIC_IDS.len());
    }

    #[test]
    fn analyzer_ids_come_first() {
        assert_eq!(&fixable_diagnostic_ids()[..3], &["PC001", "PC003", "PC002"]);
        assert!(fixable_diagnostic_ids()[3..]
            .iter()
            .all(|id| id.starts_with("DE")));
    }
}
