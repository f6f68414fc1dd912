//! Configuration loading and management

use crate::core::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Oldest a generated record may be, about a thousand years
pub const MAX_AGE_DAYS: u32 = 365_000;

/// Largest id base; leaves room for every position a collection can hold
pub const MAX_ID_BASE: u64 = i64::MAX as u64;

/// Settings for the mock payment generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records in the backing collection
    pub record_count: usize,

    /// Prefix of every record id (`PAY` gives `PAY-1000`)
    pub id_prefix: String,

    /// Number added to a record's position to form its id
    pub id_base: u64,

    /// Smallest generated amount (inclusive)
    pub amount_min: u32,

    /// Largest generated amount (inclusive)
    pub amount_max: u32,

    /// Records are dated up to this many days before generation
    pub max_age_days: u32,

    /// Fixed seed for reproducible collections
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 500,
            id_prefix: "PAY".to_string(),
            id_base: 1000,
            amount_min: 50,
            amount_max: 549,
            max_age_days: 115,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.amount_min > self.amount_max {
            return Err(ConfigError::InvalidValue {
                field: "generator.amount_min".to_string(),
                message: format!(
                    "{} is greater than amount_max {}",
                    self.amount_min, self.amount_max
                ),
            });
        }
        if self.max_age_days > MAX_AGE_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "generator.max_age_days".to_string(),
                message: format!("{} exceeds {}", self.max_age_days, MAX_AGE_DAYS),
            });
        }
        let fits = self.id_base <= MAX_ID_BASE
            && self.id_base.checked_add(self.record_count as u64).is_some();
        if !fits {
            return Err(ConfigError::InvalidValue {
                field: "generator.id_base".to_string(),
                message: format!(
                    "{} leaves no room for {} record ids",
                    self.id_base, self.record_count
                ),
            });
        }
        if self.id_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "generator.id_prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for the paginated service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Simulated latency applied to every page request
    pub latency_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { latency_ms: 500 }
    }
}

impl ServiceConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Complete configuration for a mock dashboard backend
///
/// Every section and field is optional in YAML; missing values take their
/// defaults.
///
/// ```yaml
/// generator:
///   record_count: 500
///   seed: 42
/// service:
///   latency_ms: 250
/// server:
///   bind: 0.0.0.0:8080
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub generator: GeneratorConfig,
    pub service: ServiceConfig,
    pub server: ServerConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()
    }
}
