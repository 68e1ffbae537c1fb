//! Null-percentage comparison between two profiles.

use std::collections::BTreeMap;

use crate::compare::quality::NullProfile;
use crate::compare::types::NullComparisonRow;

/// Compare two null profiles column by column.
///
/// Columns are aligned on uppercase-folded names; a column present in only
/// one profile counts as 0% in the other. Both percentages are rounded to the
/// nearest integer with round-half-up (the domain is non-negative, so
/// `f64::round` applies exactly that rule on both sides) and the difference is
/// the absolute value of the rounded pair. Output is sorted ascending by
/// column name for determinism.
pub fn compare_nulls(source: &NullProfile, target: &NullProfile) -> Vec<NullComparisonRow> {
    let fold = |profile: &NullProfile| -> BTreeMap<String, f64> {
        profile
            .iter()
            .map(|(name, pct)| (name.to_uppercase(), *pct))
            .collect()
    };

    let source = fold(source);
    let target = fold(target);

    let mut columns: Vec<&String> = source.keys().chain(target.keys()).collect();
    columns.sort();
    columns.dedup();

    columns
        .into_iter()
        .map(|column| {
            let source_percent = source.get(column).copied().unwrap_or(0.0).round() as i64;
            let target_percent = target.get(column).copied().unwrap_or(0.0).round() as i64;
            NullComparisonRow {
                column: column.clone(),
                source_percent,
                target_percent,
                difference: (source_percent - target_percent).abs(),
            }
        })
        .collect()
}
