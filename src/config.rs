//! TOML application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bench::BenchmarkConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth of the benchmark baseline.
    pub baseline_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { baseline_depth: 6 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub benchmark: BenchmarkConfig,
}

impl AppConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults. Parse
    /// and validation failures in an existing file are still fatal.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.baseline_depth < 1 {
            return Err(ConfigError::Validation(
                "engine.baseline_depth must be at least 1".to_string(),
            ));
        }
        if self.benchmark.num_games < 2 {
            return Err(ConfigError::Validation(
                "benchmark.num_games must be at least 2".to_string(),
            ));
        }
        if self.benchmark.num_games % 2 != 0 {
            return Err(ConfigError::Validation(
                "benchmark.num_games must be even so both seats play equally".to_string(),
            ));
        }
        Ok(())
    }

    /// The default config rendered as TOML, for writing a starter file.
    pub fn default_toml() -> String {
        // serializing a Default cannot fail
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
