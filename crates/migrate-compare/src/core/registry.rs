//! Adapter registry for explicit dependency injection.
//!
//! The [`AdapterRegistry`] maps dialect tags to [`CatalogAdapter`]
//! implementations. Unlike global singletons, it is explicitly constructed and
//! injected, so adding a dialect never touches comparison logic and tests can
//! build registries out of in-memory adapters.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::traits::CatalogAdapter;
use crate::error::{CompareError, Result};

/// Supported database dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectKind {
    /// PostgreSQL (lowercase unquoted identifiers).
    Postgresql,
    /// Snowflake (uppercase unquoted identifiers).
    Snowflake,
    /// Microsoft Fabric SQL endpoint (bracket-quoted identifiers).
    Fabric,
}

impl DialectKind {
    /// Canonical dialect tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DialectKind::Postgresql => "postgresql",
            DialectKind::Snowflake => "snowflake",
            DialectKind::Fabric => "fabric",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = CompareError;

    /// Parse a dialect tag, accepting common aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DialectKind::Postgresql),
            "snowflake" => Ok(DialectKind::Snowflake),
            "fabric" | "fabric_sql" => Ok(DialectKind::Fabric),
            other => Err(CompareError::UnsupportedDialect(other.to_string())),
        }
    }
}

/// Registry of catalog adapters by dialect.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = AdapterRegistry::new();
/// registry.register(DialectKind::Postgresql, PgCatalog::connect(&cfg).await?);
/// registry.register(DialectKind::Snowflake, SnowflakeCatalog::connect(&cfg).await?);
///
/// let source = registry.require(&config.source.r#type)?;
/// ```
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<DialectKind, Arc<dyn CatalogAdapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter for a dialect.
    pub fn register(&mut self, kind: DialectKind, adapter: impl CatalogAdapter + 'static) {
        self.adapters.insert(kind, Arc::new(adapter));
    }

    /// Register an adapter as an Arc (for sharing).
    pub fn register_arc(&mut self, kind: DialectKind, adapter: Arc<dyn CatalogAdapter>) {
        self.adapters.insert(kind, adapter);
    }

    /// Get an adapter by dialect, if registered.
    pub fn get(&self, kind: DialectKind) -> Option<Arc<dyn CatalogAdapter>> {
        self.adapters.get(&kind).cloned()
    }

    /// Resolve a dialect tag to its registered adapter.
    ///
    /// Fails with `UnsupportedDialect` when the tag does not parse or no
    /// adapter is registered for it.
    pub fn require(&self, tag: &str) -> Result<Arc<dyn CatalogAdapter>> {
        let kind = tag.parse::<DialectKind>()?;
        self.get(kind)
            .ok_or_else(|| CompareError::UnsupportedDialect(tag.to_string()))
    }

    /// Check if an adapter is registered for a dialect.
    pub fn has(&self, kind: DialectKind) -> bool {
        self.adapters.contains_key(&kind)
    }

    /// Get all registered dialects.
    pub fn dialects(&self) -> Vec<DialectKind> {
        self.adapters.keys().copied().collect()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}
