//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Default number of rows sampled per table for quality metrics.
pub const DEFAULT_SAMPLE_ROWS: usize = 120;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Source database endpoint.
    pub source: EndpointConfig,

    /// Target database endpoint.
    pub target: EndpointConfig,

    /// Comparison behavior settings.
    #[serde(default)]
    pub comparison: ComparisonSettings,
}

/// One side of the comparison.
///
/// Connection details and credentials belong to the adapter implementation
/// for the endpoint's dialect; this config only identifies which adapter to
/// use and where to look.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Dialect tag (e.g., "postgresql", "snowflake", "fabric").
    pub r#type: String,

    /// Database name.
    pub database: String,

    /// Schema name.
    pub schema: String,
}

/// Comparison behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSettings {
    /// Rows sampled per table for null/duplicate metrics (default: 120).
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,

    /// Tables to include (exact names, case-insensitive; empty = all common).
    #[serde(default)]
    pub include_tables: Vec<String>,

    /// Tables to exclude (exact names, case-insensitive).
    #[serde(default)]
    pub exclude_tables: Vec<String>,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            sample_rows: DEFAULT_SAMPLE_ROWS,
            include_tables: Vec::new(),
            exclude_tables: Vec::new(),
        }
    }
}

impl ComparisonSettings {
    /// Check whether a table passes the include/exclude filters.
    pub fn selects(&self, table: &str) -> bool {
        let excluded = self
            .exclude_tables
            .iter()
            .any(|t| t.eq_ignore_ascii_case(table));
        if excluded {
            return false;
        }
        self.include_tables.is_empty()
            || self
                .include_tables
                .iter()
                .any(|t| t.eq_ignore_ascii_case(table))
    }
}

fn default_sample_rows() -> usize {
    DEFAULT_SAMPLE_ROWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = ComparisonSettings::default();
        assert_eq!(settings.sample_rows, 120);
        assert!(settings.include_tables.is_empty());
        assert!(settings.exclude_tables.is_empty());
    }

    #[test]
    fn test_selects_with_no_filters() {
        let settings = ComparisonSettings::default();
        assert!(settings.selects("orders"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let settings = ComparisonSettings {
            include_tables: vec!["orders".to_string()],
            exclude_tables: vec!["ORDERS".to_string()],
            ..Default::default()
        };
        assert!(!settings.selects("orders"));
    }

    #[test]
    fn test_include_filter_is_case_insensitive() {
        let settings = ComparisonSettings {
            include_tables: vec!["Orders".to_string()],
            ..Default::default()
        };
        assert!(settings.selects("ORDERS"));
        assert!(!settings.selects("customers"));
    }
}
