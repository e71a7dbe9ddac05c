//! Crate-level error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("agent {agent} returned invalid column {column}")]
    InvalidMove { agent: String, column: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("num_games must be even".to_string());
        assert_eq!(err.to_string(), "invalid config: num_games must be even");
    }

    #[test]
    fn benchmark_error_display() {
        let err = BenchmarkError::InvalidMove {
            agent: "Baseline".to_string(),
            column: 9,
        };
        assert_eq!(err.to_string(), "agent Baseline returned invalid column 9");
    }
}
