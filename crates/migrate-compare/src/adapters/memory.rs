//! In-memory catalog adapter.
//!
//! Serves pre-materialized metadata and samples through the
//! [`CatalogAdapter`] interface. Useful for tests and for embedding the
//! comparison engine in pipelines where data has already been fetched by
//! other means.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::schema::{ColumnDescriptor, SampleTable};
use crate::core::traits::CatalogAdapter;
use crate::error::{CompareError, Result};

/// One table's pre-materialized metadata and sample.
#[derive(Debug, Clone)]
pub struct MemoryTable {
    /// Table name in its native casing.
    pub name: String,

    /// Column metadata.
    pub columns: Vec<ColumnDescriptor>,

    /// Full-table row count, which may exceed the sample size.
    pub row_count: i64,

    /// Bounded sample of the table's rows.
    pub sample: SampleTable,
}

impl MemoryTable {
    /// Create a new in-memory table.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
        row_count: i64,
        sample: SampleTable,
    ) -> Self {
        Self {
            name: name.into(),
            columns,
            row_count,
            sample,
        }
    }
}

/// Catalog adapter over in-memory tables, keyed by schema name.
///
/// Schema and table lookups are case-insensitive, mirroring how real
/// adapters absorb their dialect's identifier casing rules.
pub struct MemoryCatalog {
    dialect: String,
    databases: Vec<String>,
    schemas: HashMap<String, Vec<String>>,
    tables: HashMap<String, Vec<MemoryTable>>,
}

impl MemoryCatalog {
    /// Create an empty catalog with the given dialect tag.
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            databases: Vec::new(),
            schemas: HashMap::new(),
            tables: HashMap::new(),
        }
    }

    /// Add a database with its schema names.
    pub fn add_database(&mut self, database: impl Into<String>, schemas: Vec<String>) {
        let database = database.into();
        self.schemas.insert(database.to_uppercase(), schemas);
        self.databases.push(database);
    }

    /// Add a table under a schema.
    pub fn add_table(&mut self, schema: &str, table: MemoryTable) {
        self.tables
            .entry(schema.to_uppercase())
            .or_default()
            .push(table);
    }

    fn schema_tables(&self, schema: &str) -> Result<&[MemoryTable]> {
        self.tables
            .get(&schema.to_uppercase())
            .map(Vec::as_slice)
            .ok_or_else(|| {
                CompareError::invalid_input(format!("unknown schema '{}'", schema))
            })
    }

    fn find_table(&self, schema: &str, table: &str) -> Result<&MemoryTable> {
        self.schema_tables(schema)?
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(table))
            .ok_or_else(|| {
                CompareError::invalid_input(format!("unknown table '{}.{}'", schema, table))
            })
    }
}

#[async_trait]
impl CatalogAdapter for MemoryCatalog {
    async fn list_databases(&self) -> Result<Vec<String>> {
        Ok(self.databases.clone())
    }

    async fn list_schemas(&self, database: &str) -> Result<Vec<String>> {
        self.schemas
            .get(&database.to_uppercase())
            .cloned()
            .ok_or_else(|| {
                CompareError::invalid_input(format!("unknown database '{}'", database))
            })
    }

    async fn list_tables(&self, schema: &str) -> Result<Vec<String>> {
        Ok(self
            .schema_tables(schema)?
            .iter()
            .map(|t| t.name.clone())
            .collect())
    }

    async fn get_row_count(&self, schema: &str, table: &str) -> Result<i64> {
        Ok(self.find_table(schema, table)?.row_count)
    }

    async fn get_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnDescriptor>> {
        Ok(self.find_table(schema, table)?.columns.clone())
    }

    async fn get_sample(&self, schema: &str, table: &str, limit: usize) -> Result<SampleTable> {
        let mut sample = self.find_table(schema, table)?.sample.clone();
        sample.truncate(limit);
        Ok(sample)
    }

    fn dialect(&self) -> &str {
        &self.dialect
    }
}
