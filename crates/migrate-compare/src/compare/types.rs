//! Result records produced by the comparison core.
//!
//! All records are plain serde-serializable structs so a reporting layer can
//! render or export them without touching comparison logic.

use serde::{Deserialize, Serialize};

/// Partition of two table-name lists by case-insensitive identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReconciliation {
    /// Tables present on both sides, in the source's native casing.
    pub common: Vec<String>,

    /// Tables present only in the source, in the source's native casing.
    pub source_only: Vec<String>,

    /// Tables present only in the target, in the target's native casing.
    pub target_only: Vec<String>,
}

impl TableReconciliation {
    /// Check whether both sides list exactly the same tables.
    pub fn is_complete(&self) -> bool {
        self.source_only.is_empty() && self.target_only.is_empty()
    }
}

/// Result of comparing two row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCountComparison {
    /// Whether the counts are exactly equal.
    pub matches: bool,

    /// Row count in the source table.
    pub source_count: i64,

    /// Row count in the target table.
    pub target_count: i64,
}

/// Result of the baseline schema comparison.
///
/// The baseline deliberately compares column cardinality only; see
/// [`diff_column_types`](crate::compare::schema::diff_column_types) for the
/// name/type-aware extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaComparison {
    /// Whether both tables have the same number of columns.
    pub column_count_match: bool,

    /// Number of columns in the source table.
    pub source_column_count: usize,

    /// Number of columns in the target table.
    pub target_column_count: usize,
}

/// One column's type discrepancy from the extension diff.
///
/// Names and types are reported uppercased, the casing the comparison was
/// performed in. A `None` type means the column is absent on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTypeDiff {
    /// Uppercased column name.
    pub column: String,

    /// Uppercased source data type, if the column exists in the source.
    pub source_type: Option<String>,

    /// Uppercased target data type, if the column exists in the target.
    pub target_type: Option<String>,
}

/// One column's null-percentage comparison.
///
/// Percentages are rounded to the nearest integer before differencing;
/// a column present on only one side counts as 0% on the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullComparisonRow {
    /// Uppercased column name.
    pub column: String,

    /// Rounded null percentage in the source sample.
    pub source_percent: i64,

    /// Rounded null percentage in the target sample.
    pub target_percent: i64,

    /// Absolute difference of the rounded percentages.
    pub difference: i64,
}

/// Full comparison result for one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableComparison {
    /// Table name in the source's native casing.
    pub table: String,

    /// Row count comparison.
    pub row_counts: RowCountComparison,

    /// Baseline (count-only) schema comparison.
    pub columns: SchemaComparison,

    /// Duplicate rows observed in the source sample (extra-copies count).
    pub source_duplicates: usize,

    /// Duplicate rows observed in the target sample (extra-copies count).
    pub target_duplicates: usize,

    /// Per-column null-percentage comparison, sorted by column name.
    pub null_comparison: Vec<NullComparisonRow>,

    /// Rows inspected per side for the sample-based metrics.
    pub sample_rows: usize,

    /// Duration of this table's comparison in milliseconds.
    pub duration_ms: u64,
}

impl TableComparison {
    /// Check if any cross-side discrepancy was observed.
    ///
    /// Duplicate counts are informational (they describe one side, not a
    /// difference between sides) and do not affect this flag.
    pub fn has_discrepancies(&self) -> bool {
        !self.row_counts.matches
            || !self.columns.column_count_match
            || self.null_comparison.iter().any(|row| row.difference > 0)
    }
}

/// A table whose comparison failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFailure {
    /// Table name in the source's native casing.
    pub table: String,

    /// Human-readable failure reason.
    pub reason: String,
}

/// Aggregate result of a batch comparison run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRunResult {
    /// Table presence partition for the two schemas.
    pub reconciliation: TableReconciliation,

    /// Per-table comparison results.
    pub tables: Vec<TableComparison>,

    /// Tables compared successfully.
    pub tables_checked: usize,

    /// Tables with no observed discrepancies.
    pub tables_matched: usize,

    /// Tables with at least one discrepancy.
    pub tables_with_discrepancies: usize,

    /// Tables whose comparison failed, with reasons.
    pub failures: Vec<TableFailure>,

    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

impl CompareRunResult {
    /// Create an empty result for the given reconciliation.
    pub fn new(reconciliation: TableReconciliation) -> Self {
        Self {
            reconciliation,
            ..Default::default()
        }
    }

    /// Add one table's comparison result.
    pub fn add_table(&mut self, result: TableComparison) {
        self.tables_checked += 1;
        if result.has_discrepancies() {
            self.tables_with_discrepancies += 1;
        } else {
            self.tables_matched += 1;
        }
        self.tables.push(result);
    }

    /// Record a table whose comparison failed.
    pub fn add_failure(&mut self, table: impl Into<String>, reason: impl Into<String>) {
        self.failures.push(TableFailure {
            table: table.into(),
            reason: reason.into(),
        });
    }
}

/// Progress update emitted during a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareProgressUpdate {
    /// Current table being compared.
    pub table: String,

    /// Total number of tables in this run.
    pub tables_total: usize,

    /// Number of tables completed (including failures).
    pub tables_completed: usize,

    /// Number of tables with discrepancies so far.
    pub discrepancies_found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_comparison() -> TableComparison {
        TableComparison {
            table: "orders".to_string(),
            row_counts: RowCountComparison {
                matches: true,
                source_count: 10,
                target_count: 10,
            },
            columns: SchemaComparison {
                column_count_match: true,
                source_column_count: 3,
                target_column_count: 3,
            },
            source_duplicates: 0,
            target_duplicates: 0,
            null_comparison: vec![NullComparisonRow {
                column: "ID".to_string(),
                source_percent: 0,
                target_percent: 0,
                difference: 0,
            }],
            sample_rows: 120,
            duration_ms: 1,
        }
    }

    #[test]
    fn test_has_discrepancies_flags_each_dimension() {
        assert!(!clean_comparison().has_discrepancies());

        let mut row_mismatch = clean_comparison();
        row_mismatch.row_counts.matches = false;
        assert!(row_mismatch.has_discrepancies());

        let mut column_mismatch = clean_comparison();
        column_mismatch.columns.column_count_match = false;
        assert!(column_mismatch.has_discrepancies());

        let mut null_drift = clean_comparison();
        null_drift.null_comparison[0].difference = 5;
        assert!(null_drift.has_discrepancies());

        // Duplicates alone are informational
        let mut dups_only = clean_comparison();
        dups_only.source_duplicates = 4;
        assert!(!dups_only.has_discrepancies());
    }

    #[test]
    fn test_run_result_accumulation() {
        let mut run = CompareRunResult::new(TableReconciliation::default());

        run.add_table(clean_comparison());
        let mut bad = clean_comparison();
        bad.row_counts.matches = false;
        run.add_table(bad);
        run.add_failure("broken", "catalog timeout");

        assert_eq!(run.tables_checked, 2);
        assert_eq!(run.tables_matched, 1);
        assert_eq!(run.tables_with_discrepancies, 1);
        assert_eq!(run.failures.len(), 1);
        assert_eq!(run.failures[0].table, "broken");
    }

    #[test]
    fn test_results_serialize_for_export() {
        let run = {
            let mut run = CompareRunResult::new(TableReconciliation {
                common: vec!["orders".to_string()],
                source_only: vec![],
                target_only: vec![],
            });
            run.add_table(clean_comparison());
            run
        };

        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"orders\""));
        assert!(json.contains("\"tables_checked\":1"));
    }
}
