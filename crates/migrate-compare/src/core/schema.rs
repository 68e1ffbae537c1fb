//! Schema and sample types flowing across the catalog boundary.
//!
//! These types are the normalized, database-agnostic shapes that catalog
//! adapters return and the comparison core consumes. Native identifier casing
//! is preserved for display; case folding happens only inside comparisons.

use serde::{Deserialize, Serialize};

use crate::core::value::ScalarValue;
use crate::error::{CompareError, Result};

/// Column metadata as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name in the catalog's native casing.
    pub name: String,

    /// Data type string (e.g., "integer", "VARCHAR", "timestamp_ntz").
    pub data_type: String,
}

impl ColumnDescriptor {
    /// Create a new column descriptor.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A bounded sample of a table's rows.
///
/// Rows are pulled by the adapter without an ordering guarantee, so metrics
/// computed over a sample (null percentages, duplicate counts) are
/// approximate unless the full table fits within the sample limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleTable {
    /// Column names in the catalog's native casing, in select order.
    columns: Vec<String>,

    /// Row-major cell values; every row has exactly one cell per column.
    rows: Vec<Vec<ScalarValue>>,
}

impl SampleTable {
    /// Create a sample, rejecting rows whose width does not match the
    /// column list.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<ScalarValue>>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(CompareError::invalid_input(format!(
                    "sample row {} has {} cells but the sample has {} columns",
                    idx,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Create an empty sample with the given column list.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names in select order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Sampled rows.
    pub fn rows(&self) -> &[Vec<ScalarValue>] {
        &self.rows
    }

    /// Number of sampled rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sample has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Truncate the sample to at most `limit` rows.
    pub fn truncate(&mut self, limit: usize) {
        self.rows.truncate(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rejects_ragged_rows() {
        let result = SampleTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![ScalarValue::Int(1), ScalarValue::Int(2)],
                vec![ScalarValue::Int(3)],
            ],
        );
        assert!(matches!(result, Err(CompareError::InvalidInput(_))));
    }

    #[test]
    fn test_sample_accepts_rectangular_rows() {
        let sample = SampleTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![ScalarValue::Int(1), ScalarValue::Null],
                vec![ScalarValue::Int(3), ScalarValue::from("x")],
            ],
        )
        .unwrap();
        assert_eq!(sample.row_count(), 2);
        assert_eq!(sample.columns(), ["a", "b"]);
        assert!(!sample.is_empty());
    }

    #[test]
    fn test_empty_sample() {
        let sample = SampleTable::empty(vec!["a".to_string()]);
        assert!(sample.is_empty());
        assert_eq!(sample.row_count(), 0);
    }

    #[test]
    fn test_truncate_bounds_rows() {
        let mut sample = SampleTable::new(
            vec!["a".to_string()],
            (0..10).map(|i| vec![ScalarValue::Int(i)]).collect(),
        )
        .unwrap();
        sample.truncate(3);
        assert_eq!(sample.row_count(), 3);
    }
}
