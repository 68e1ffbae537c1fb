//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use std::path::Path;

use crate::compare::CompareRequest;
use crate::error::Result;

impl CompareConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: CompareConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Build a batch comparison request for the configured schemas.
    pub fn request(&self) -> CompareRequest {
        CompareRequest {
            source_schema: self.source.schema.clone(),
            target_schema: self.target.schema.clone(),
            tables: None,
            sample_rows: Some(self.comparison.sample_rows),
        }
    }
}
