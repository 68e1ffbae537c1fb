//! Sample-based quality checks: duplicate rows and null profiles.
//!
//! Both operations see only a bounded sample of the table, so their results
//! are approximations of the full table unless it fits within the sample
//! limit.

use std::collections::{HashMap, HashSet};

use crate::core::schema::SampleTable;
use crate::error::{CompareError, Result};

/// Per-column null percentage in [0, 100], keyed by uppercased column name.
///
/// Values are unrounded; rounding is applied by presentation-side consumers
/// such as [`compare_nulls`](crate::compare::nulls::compare_nulls).
pub type NullProfile = HashMap<String, f64>;

/// Count duplicate rows in a sample under the "extra copies" definition.
///
/// A row counts once for every appearance beyond its first, using whole-row
/// structural equality over all columns including nulls: `total - distinct`.
/// Five identical rows therefore count as 4 duplicates. An empty sample has
/// none.
pub fn count_duplicates(sample: &SampleTable) -> usize {
    let distinct: HashSet<_> = sample.rows().iter().collect();
    sample.row_count() - distinct.len()
}

/// Compute the per-column null percentage over a sample.
///
/// Each column is profiled independently over the same fixed row set:
/// `100 * nulls / rows` as an unrounded `f64`. Fails with `EmptySample` on a
/// zero-row sample; callers must guard empty samples rather than receive a
/// silent division by zero.
pub fn null_profile(sample: &SampleTable) -> Result<NullProfile> {
    if sample.is_empty() {
        return Err(CompareError::EmptySample);
    }

    let total = sample.row_count() as f64;
    let mut profile = NullProfile::with_capacity(sample.columns().len());

    for (idx, column) in sample.columns().iter().enumerate() {
        let nulls = sample.rows().iter().filter(|row| row[idx].is_null()).count();
        profile.insert(column.to_uppercase(), 100.0 * nulls as f64 / total);
    }

    Ok(profile)
}
