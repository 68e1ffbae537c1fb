//! Table set reconciliation.

use std::collections::HashSet;

use crate::compare::types::TableReconciliation;

/// Partition two table-name lists into common, source-only, and target-only
/// sets by case-insensitive (uppercase-folded) identity.
///
/// Output preserves native casing and input order: `common` and `source_only`
/// carry the source's casing, `target_only` the target's. Names differing only
/// by case within one list fold to a single identity; every original casing
/// that folds onto a shared identity is reported. No diacritic or whitespace
/// folding is applied.
pub fn reconcile(source_tables: &[String], target_tables: &[String]) -> TableReconciliation {
    let source_keys: HashSet<String> = source_tables.iter().map(|t| t.to_uppercase()).collect();
    let target_keys: HashSet<String> = target_tables.iter().map(|t| t.to_uppercase()).collect();

    let common = source_tables
        .iter()
        .filter(|t| target_keys.contains(&t.to_uppercase()))
        .cloned()
        .collect();

    let source_only = source_tables
        .iter()
        .filter(|t| !target_keys.contains(&t.to_uppercase()))
        .cloned()
        .collect();

    let target_only = target_tables
        .iter()
        .filter(|t| !source_keys.contains(&t.to_uppercase()))
        .cloned()
        .collect();

    TableReconciliation {
        common,
        source_only,
        target_only,
    }
}
