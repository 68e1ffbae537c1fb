//! Configuration validation.

use super::CompareConfig;
use crate::core::registry::DialectKind;
use crate::error::{CompareError, Result};

/// Validate the configuration.
pub fn validate(config: &CompareConfig) -> Result<()> {
    // Source validation
    if config.source.database.is_empty() {
        return Err(CompareError::Config("source.database is required".into()));
    }
    if config.source.schema.is_empty() {
        return Err(CompareError::Config("source.schema is required".into()));
    }
    config.source.r#type.parse::<DialectKind>()?;

    // Target validation
    if config.target.database.is_empty() {
        return Err(CompareError::Config("target.database is required".into()));
    }
    if config.target.schema.is_empty() {
        return Err(CompareError::Config("target.schema is required".into()));
    }
    config.target.r#type.parse::<DialectKind>()?;

    if config.comparison.sample_rows == 0 {
        return Err(CompareError::Config(
            "comparison.sample_rows must be at least 1".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComparisonSettings, EndpointConfig};

    fn valid_config() -> CompareConfig {
        CompareConfig {
            source: EndpointConfig {
                r#type: "postgresql".to_string(),
                database: "warehouse".to_string(),
                schema: "public".to_string(),
            },
            target: EndpointConfig {
                r#type: "snowflake".to_string(),
                database: "WAREHOUSE".to_string(),
                schema: "PUBLIC".to_string(),
            },
            comparison: ComparisonSettings::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_source_database() {
        let mut config = valid_config();
        config.source.database = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_target_schema() {
        let mut config = valid_config();
        config.target.schema = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_unknown_dialect_tag() {
        let mut config = valid_config();
        config.source.r#type = "oracle".to_string();
        assert!(matches!(
            validate(&config),
            Err(CompareError::UnsupportedDialect(_))
        ));
    }

    #[test]
    fn test_dialect_alias_is_accepted() {
        let mut config = valid_config();
        config.source.r#type = "pg".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_sample_rows_rejected() {
        let mut config = valid_config();
        config.comparison.sample_rows = 0;
        assert!(validate(&config).is_err());
    }
}
