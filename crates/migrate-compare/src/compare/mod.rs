//! Table comparison engine.
//!
//! Compares table-level data between a source and a target catalog:
//!
//! - **Presence**: case-insensitive reconciliation of table-name lists
//! - **Row counts**: exact-equality comparison
//! - **Schema**: column-count comparison (with an optional type-aware diff)
//! - **Quality**: duplicate rows and null percentages over bounded samples
//!
//! The comparison functions themselves are pure and synchronous; only the
//! engine is async, because it drives two [`CatalogAdapter`]s. Sample-based
//! metrics are approximate: they see at most the configured number of rows
//! per table.

pub mod nulls;
pub mod quality;
pub mod reconcile;
pub mod rowcount;
pub mod schema;
pub mod types;

// Re-exports
pub use nulls::compare_nulls;
pub use quality::{count_duplicates, null_profile, NullProfile};
pub use reconcile::reconcile;
pub use rowcount::compare_row_counts;
pub use schema::{compare_schemas, diff_column_types};
pub use types::{
    ColumnTypeDiff, CompareProgressUpdate, CompareRunResult, NullComparisonRow,
    RowCountComparison, SchemaComparison, TableComparison, TableFailure, TableReconciliation,
};

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ComparisonSettings;
use crate::core::traits::CatalogAdapter;
use crate::error::Result;

/// A batch comparison request.
///
/// Carries everything one run needs explicitly, instead of reading
/// process-wide state. Schema names are passed to the adapters verbatim; each
/// adapter applies its own dialect's casing rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Schema to compare on the source side.
    pub source_schema: String,

    /// Schema to compare on the target side.
    pub target_schema: String,

    /// Explicit tables to compare; `None` compares every common table.
    pub tables: Option<Vec<String>>,

    /// Sample size override for this run.
    pub sample_rows: Option<usize>,
}

/// Engine driving per-table comparisons between two catalogs.
pub struct CompareEngine {
    source: Arc<dyn CatalogAdapter>,
    target: Arc<dyn CatalogAdapter>,
    settings: ComparisonSettings,
    progress_tx: Option<mpsc::Sender<CompareProgressUpdate>>,
}

impl CompareEngine {
    /// Create a new comparison engine.
    pub fn new(
        source: Arc<dyn CatalogAdapter>,
        target: Arc<dyn CatalogAdapter>,
        settings: ComparisonSettings,
    ) -> Self {
        Self {
            source,
            target,
            settings,
            progress_tx: None,
        }
    }

    /// Set progress channel for updates.
    pub fn with_progress(mut self, tx: mpsc::Sender<CompareProgressUpdate>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Send progress update if channel is configured.
    async fn send_progress(&self, update: CompareProgressUpdate) {
        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(update).await;
        }
    }

    /// Compare a single table present on both sides.
    ///
    /// Fetches row counts, column metadata, and bounded samples from both
    /// catalogs, then runs the pure comparison functions over them. Empty
    /// samples are guarded here, so an empty table yields an empty null
    /// comparison instead of an `EmptySample` error.
    pub async fn compare_table(
        &self,
        request: &CompareRequest,
        table: &str,
    ) -> Result<TableComparison> {
        let start = Instant::now();
        let limit = request.sample_rows.unwrap_or(self.settings.sample_rows);

        debug!(
            "Comparing table {} ({}.{} vs {}.{})",
            table,
            request.source_schema,
            self.source.dialect(),
            request.target_schema,
            self.target.dialect()
        );

        let source_count = self
            .source
            .get_row_count(&request.source_schema, table)
            .await?;
        let target_count = self
            .target
            .get_row_count(&request.target_schema, table)
            .await?;
        let row_counts = compare_row_counts(source_count, target_count)?;

        let source_columns = self
            .source
            .get_columns(&request.source_schema, table)
            .await?;
        let target_columns = self
            .target
            .get_columns(&request.target_schema, table)
            .await?;
        let columns = compare_schemas(&source_columns, &target_columns);

        let source_sample = self
            .source
            .get_sample(&request.source_schema, table, limit)
            .await?;
        let target_sample = self
            .target
            .get_sample(&request.target_schema, table, limit)
            .await?;

        let source_duplicates = count_duplicates(&source_sample);
        let target_duplicates = count_duplicates(&target_sample);

        let source_nulls = if source_sample.is_empty() {
            NullProfile::new()
        } else {
            null_profile(&source_sample)?
        };
        let target_nulls = if target_sample.is_empty() {
            NullProfile::new()
        } else {
            null_profile(&target_sample)?
        };
        let null_comparison = compare_nulls(&source_nulls, &target_nulls);

        Ok(TableComparison {
            table: table.to_string(),
            row_counts,
            columns,
            source_duplicates,
            target_duplicates,
            null_comparison,
            sample_rows: source_sample.row_count().max(target_sample.row_count()),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Run a batch comparison over two schemas.
    ///
    /// Lists tables on both sides, reconciles them, then compares every
    /// common table (or the request's explicit table list) that passes the
    /// engine's include/exclude filters. A single table's failure is recorded
    /// and logged; it never aborts the rest of the batch.
    pub async fn run(&self, request: &CompareRequest) -> Result<CompareRunResult> {
        let start = Instant::now();

        info!(
            "Comparing {}.{} against {}.{}",
            self.source.dialect(),
            request.source_schema,
            self.target.dialect(),
            request.target_schema
        );

        let source_tables = self.source.list_tables(&request.source_schema).await?;
        let target_tables = self.target.list_tables(&request.target_schema).await?;
        let reconciliation = reconcile(&source_tables, &target_tables);

        if !reconciliation.is_complete() {
            info!(
                "Table presence differs: {} common, {} source-only, {} target-only",
                reconciliation.common.len(),
                reconciliation.source_only.len(),
                reconciliation.target_only.len()
            );
        }

        let tables: Vec<String> = match &request.tables {
            Some(tables) => tables.clone(),
            None => reconciliation.common.clone(),
        }
        .into_iter()
        .filter(|t| self.settings.selects(t))
        .collect();

        let mut result = CompareRunResult::new(reconciliation);
        let total = tables.len();

        for (i, table) in tables.iter().enumerate() {
            match self.compare_table(request, table).await {
                Ok(comparison) => result.add_table(comparison),
                Err(err) => {
                    warn!("Comparison failed for table {}: {}", table, err);
                    result.add_failure(table.clone(), err.to_string());
                }
            }

            self.send_progress(CompareProgressUpdate {
                table: table.clone(),
                tables_total: total,
                tables_completed: i + 1,
                discrepancies_found: result.tables_with_discrepancies,
            })
            .await;
        }

        result.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Compared {} tables: {} matched, {} with discrepancies, {} failed",
            result.tables_checked,
            result.tables_matched,
            result.tables_with_discrepancies,
            result.failures.len()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryCatalog, MemoryTable};
    use crate::core::schema::{ColumnDescriptor, SampleTable};
    use crate::core::value::ScalarValue;

    fn order_columns(upper: bool) -> Vec<ColumnDescriptor> {
        let names = ["id", "customer_id", "status", "amount", "created_at"];
        let types = ["integer", "integer", "text", "numeric", "timestamp"];
        names
            .iter()
            .zip(types.iter())
            .map(|(n, t)| {
                if upper {
                    ColumnDescriptor::new(n.to_uppercase(), t.to_uppercase())
                } else {
                    ColumnDescriptor::new(*n, *t)
                }
            })
            .collect()
    }

    fn order_sample(columns: &[ColumnDescriptor], rows: usize, null_status_every: usize) -> SampleTable {
        let names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
        let rows = (0..rows as i64)
            .map(|i| {
                vec![
                    ScalarValue::Int(i),
                    ScalarValue::Int(i % 7),
                    if null_status_every > 0 && (i as usize) % null_status_every == 0 {
                        ScalarValue::Null
                    } else {
                        ScalarValue::from("shipped")
                    },
                    ScalarValue::Float(19.99),
                    ScalarValue::Null,
                ]
            })
            .collect();
        SampleTable::new(names, rows).unwrap()
    }

    fn source_catalog() -> Arc<dyn CatalogAdapter> {
        let columns = order_columns(false);
        let sample = order_sample(&columns, 10, 2);
        let mut catalog = MemoryCatalog::new("postgresql");
        catalog.add_database("warehouse", vec!["public".to_string()]);
        catalog.add_table("public", MemoryTable::new("orders", columns, 1000, sample));
        Arc::new(catalog)
    }

    fn target_catalog() -> Arc<dyn CatalogAdapter> {
        let columns = order_columns(true);
        let sample = order_sample(&columns, 10, 0);
        let mut catalog = MemoryCatalog::new("snowflake");
        catalog.add_database("WAREHOUSE", vec!["PUBLIC".to_string()]);
        catalog.add_table("PUBLIC", MemoryTable::new("ORDERS", columns, 998, sample));
        Arc::new(catalog)
    }

    fn request() -> CompareRequest {
        CompareRequest {
            source_schema: "public".to_string(),
            target_schema: "PUBLIC".to_string(),
            tables: None,
            sample_rows: None,
        }
    }

    #[tokio::test]
    async fn test_end_to_end_orders_scenario() {
        let engine = CompareEngine::new(
            source_catalog(),
            target_catalog(),
            ComparisonSettings::default(),
        );

        let result = engine.run(&request()).await.unwrap();

        // Reconciliation pairs orders with ORDERS under the source casing.
        assert_eq!(result.reconciliation.common, ["orders"]);
        assert!(result.reconciliation.source_only.is_empty());
        assert!(result.reconciliation.target_only.is_empty());

        assert_eq!(result.tables_checked, 1);
        let table = &result.tables[0];
        assert!(!table.row_counts.matches);
        assert_eq!(table.row_counts.source_count, 1000);
        assert_eq!(table.row_counts.target_count, 998);
        assert!(table.columns.column_count_match);
        assert_eq!(table.columns.source_column_count, 5);

        // STATUS is null in half the source sample, never in the target's.
        let status = table
            .null_comparison
            .iter()
            .find(|row| row.column == "STATUS")
            .unwrap();
        assert_eq!(status.source_percent, 50);
        assert_eq!(status.target_percent, 0);
        assert_eq!(status.difference, 50);

        // CREATED_AT is fully null on both sides: no drift.
        let created = table
            .null_comparison
            .iter()
            .find(|row| row.column == "CREATED_AT")
            .unwrap();
        assert_eq!(created.difference, 0);

        assert!(table.has_discrepancies());
        assert_eq!(result.tables_with_discrepancies, 1);
    }

    #[tokio::test]
    async fn test_one_failing_table_does_not_abort_batch() {
        let engine = CompareEngine::new(
            source_catalog(),
            target_catalog(),
            ComparisonSettings::default(),
        );

        let mut req = request();
        req.tables = Some(vec!["missing".to_string(), "orders".to_string()]);

        let result = engine.run(&req).await.unwrap();
        assert_eq!(result.tables_checked, 1);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].table, "missing");
        assert!(result.failures[0].reason.contains("missing"));
    }

    #[tokio::test]
    async fn test_exclude_filter_skips_tables() {
        let settings = ComparisonSettings {
            exclude_tables: vec!["ORDERS".to_string()],
            ..Default::default()
        };
        let engine = CompareEngine::new(source_catalog(), target_catalog(), settings);

        let result = engine.run(&request()).await.unwrap();
        assert_eq!(result.tables_checked, 0);
        assert!(result.failures.is_empty());
    }

    #[tokio::test]
    async fn test_sample_rows_override_bounds_metrics() {
        let engine = CompareEngine::new(
            source_catalog(),
            target_catalog(),
            ComparisonSettings::default(),
        );

        let mut req = request();
        req.sample_rows = Some(4);

        let table = engine.compare_table(&req, "orders").await.unwrap();
        assert_eq!(table.sample_rows, 4);
    }

    #[tokio::test]
    async fn test_empty_tables_compare_cleanly() {
        let columns = vec![ColumnDescriptor::new("id", "integer")];
        let empty = SampleTable::empty(vec!["id".to_string()]);

        let mut source = MemoryCatalog::new("postgresql");
        source.add_database("db", vec!["public".to_string()]);
        source.add_table(
            "public",
            MemoryTable::new("empty_t", columns.clone(), 0, empty.clone()),
        );

        let mut target = MemoryCatalog::new("snowflake");
        target.add_database("DB", vec!["PUBLIC".to_string()]);
        target.add_table("PUBLIC", MemoryTable::new("EMPTY_T", columns, 0, empty));

        let engine = CompareEngine::new(
            Arc::new(source),
            Arc::new(target),
            ComparisonSettings::default(),
        );

        let result = engine.run(&request()).await.unwrap();
        assert_eq!(result.tables_checked, 1);
        let table = &result.tables[0];
        assert!(table.row_counts.matches);
        assert!(table.null_comparison.is_empty());
        assert!(!table.has_discrepancies());
    }

    #[tokio::test]
    async fn test_progress_updates_are_emitted() {
        let (tx, mut rx) = mpsc::channel(8);
        let engine = CompareEngine::new(
            source_catalog(),
            target_catalog(),
            ComparisonSettings::default(),
        )
        .with_progress(tx);

        engine.run(&request()).await.unwrap();

        let update = rx.recv().await.unwrap();
        assert_eq!(update.table, "orders");
        assert_eq!(update.tables_total, 1);
        assert_eq!(update.tables_completed, 1);
        assert_eq!(update.discrepancies_found, 1);
    }
}
