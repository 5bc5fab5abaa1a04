//! Simulator errors

use combat_core::{ConfigError, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Failed to load game constants: {0}")]
    Config(#[from] ConfigError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
