//! Row count comparison.

use crate::compare::types::RowCountComparison;
use crate::error::{CompareError, Result};

/// Compare two table row counts for exact equality.
///
/// Both counts pass through unchanged; there is no tolerance or threshold.
/// Counts come from `COUNT(*)`-style catalog queries and can never legally be
/// negative, so a negative value is rejected as `InvalidInput` rather than
/// compared.
pub fn compare_row_counts(source_count: i64, target_count: i64) -> Result<RowCountComparison> {
    if source_count < 0 || target_count < 0 {
        return Err(CompareError::invalid_input(format!(
            "row counts must be non-negative (source: {}, target: {})",
            source_count, target_count
        )));
    }

    Ok(RowCountComparison {
        matches: source_count == target_count,
        source_count,
        target_count,
    })
}
