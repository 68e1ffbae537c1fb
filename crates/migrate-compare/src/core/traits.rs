//! Core trait for catalog access.
//!
//! [`CatalogAdapter`] is the boundary between the comparison core and the
//! databases being compared. Implementations own everything dialect-specific:
//! connections, credentials, identifier quoting and casing rules, and row
//! limiting syntax. The core never constructs query text.

use async_trait::async_trait;

use crate::core::schema::{ColumnDescriptor, SampleTable};
use crate::error::Result;

/// Fetch metadata and sample data from one database.
///
/// Table and schema names are passed through in the caller's casing; each
/// implementation applies its own dialect's identifier rules (lowercase
/// unquoted, uppercase unquoted, bracket-quoted, ...) before querying. This is
/// what lets a PostgreSQL `orders` and a Snowflake `ORDERS` be addressed with
/// one name.
///
/// Adapters own connection lifecycle: acquire, query, and release on every
/// exit path, including failure. Retry/backoff for transient connectivity
/// problems also belongs here, never in the comparison core.
#[async_trait]
pub trait CatalogAdapter: Send + Sync {
    /// List database names visible to the connection.
    async fn list_databases(&self) -> Result<Vec<String>>;

    /// List schema names in a database.
    async fn list_schemas(&self, database: &str) -> Result<Vec<String>>;

    /// List table names in a schema.
    async fn list_tables(&self, schema: &str) -> Result<Vec<String>>;

    /// Get the total row count of a table (`COUNT(*)` semantics).
    async fn get_row_count(&self, schema: &str, table: &str) -> Result<i64>;

    /// Get column metadata for a table.
    async fn get_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Fetch at most `limit` rows of a table, with no ordering guarantee.
    async fn get_sample(&self, schema: &str, table: &str, limit: usize) -> Result<SampleTable>;

    /// Get the dialect identifier (e.g., "postgresql", "snowflake").
    fn dialect(&self) -> &str;
}
