//! # migrate-compare
//!
//! Table-level data comparison for database migration validation.
//!
//! This library compares table data between a source and a target catalog
//! during a migration, flagging discrepancies in:
//!
//! - **Presence** via case-insensitive table-name reconciliation
//! - **Row counts** via exact equality
//! - **Column counts** (with an optional type-aware schema diff)
//! - **Null distributions** per column, over bounded samples
//! - **Duplicate rows** within bounded samples
//!
//! Dialect specifics (connections, credentials, query text, identifier
//! casing) live behind the [`CatalogAdapter`] trait; the comparison core only
//! sees normalized metadata and samples, so adding a dialect never touches
//! comparison logic.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use migrate_compare::{CompareConfig, CompareEngine};
//! # use migrate_compare::adapters::MemoryCatalog;
//!
//! #[tokio::main]
//! async fn main() -> migrate_compare::Result<()> {
//!     let config = CompareConfig::load("compare.yaml")?;
//! #   let source = Arc::new(MemoryCatalog::new("postgresql"));
//! #   let target = Arc::new(MemoryCatalog::new("snowflake"));
//!     let engine = CompareEngine::new(source, target, config.comparison.clone());
//!     let result = engine.run(&config.request()).await?;
//!     println!(
//!         "{} tables checked, {} with discrepancies",
//!         result.tables_checked, result.tables_with_discrepancies
//!     );
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod compare;
pub mod config;
pub mod core;
pub mod error;

// Re-exports for convenient access
pub use compare::{
    compare_nulls, compare_row_counts, compare_schemas, count_duplicates, diff_column_types,
    null_profile, reconcile, CompareEngine, CompareProgressUpdate, CompareRequest,
    CompareRunResult, NullComparisonRow, NullProfile, RowCountComparison, SchemaComparison,
    TableComparison, TableReconciliation,
};
pub use config::{CompareConfig, ComparisonSettings, EndpointConfig};
pub use core::{
    AdapterRegistry, CatalogAdapter, ColumnDescriptor, DialectKind, SampleTable, ScalarValue,
};
pub use error::{CompareError, Result};
