use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Error type that captures crate-level failures outside the pure engine.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<ConfigError> for FinanceError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => FinanceError::Io(io),
            ConfigError::Serde(message) => FinanceError::Config(message),
        }
    }
}
