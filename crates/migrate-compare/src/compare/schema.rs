//! Schema comparison.

use std::collections::BTreeMap;

use crate::compare::types::{ColumnTypeDiff, SchemaComparison};
use crate::core::schema::ColumnDescriptor;

/// Compare two column lists by cardinality.
///
/// This is the baseline contract: two tables "match" when they have the same
/// number of columns, regardless of names or types. Two same-sized but
/// structurally different schemas therefore report a match, a known
/// limitation of the observed behavior, kept as-is. Use
/// [`diff_column_types`] when a structural diff is wanted.
pub fn compare_schemas(
    source_columns: &[ColumnDescriptor],
    target_columns: &[ColumnDescriptor],
) -> SchemaComparison {
    SchemaComparison {
        column_count_match: source_columns.len() == target_columns.len(),
        source_column_count: source_columns.len(),
        target_column_count: target_columns.len(),
    }
}

/// Extension: diff column types by uppercased name.
///
/// Not part of the baseline contract and never feeds
/// [`SchemaComparison::column_count_match`]. Columns are aligned by
/// uppercase-folded name; a row is reported when the folded types differ or a
/// column exists on only one side. Names and types are reported uppercased,
/// sorted by column name. When a list repeats a folded name, the last
/// descriptor wins.
pub fn diff_column_types(
    source_columns: &[ColumnDescriptor],
    target_columns: &[ColumnDescriptor],
) -> Vec<ColumnTypeDiff> {
    let fold = |columns: &[ColumnDescriptor]| -> BTreeMap<String, String> {
        columns
            .iter()
            .map(|c| (c.name.to_uppercase(), c.data_type.to_uppercase()))
            .collect()
    };

    let source = fold(source_columns);
    let target = fold(target_columns);

    let mut names: Vec<&String> = source.keys().chain(target.keys()).collect();
    names.sort();
    names.dedup();

    names
        .into_iter()
        .filter_map(|name| {
            let source_type = source.get(name);
            let target_type = target.get(name);
            if source_type == target_type {
                None
            } else {
                Some(ColumnTypeDiff {
                    column: name.clone(),
                    source_type: source_type.cloned(),
                    target_type: target_type.cloned(),
                })
            }
        })
        .collect()
}
