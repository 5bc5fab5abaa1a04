//! Configuration loading from TOML files

mod constants;

pub use constants::{
    DamageConstants, DefenseConstants, GameConstants, ProgressionConstants, RewardConstants,
};

use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

static DEFAULT_CONSTANTS: OnceLock<GameConstants> = OnceLock::new();

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load game constants from a TOML file and validate them
pub fn load_game_constants(path: &Path) -> Result<GameConstants, ConfigError> {
    let constants: GameConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Get the bundled game constants
///
/// Parsed once on first use. Every entry point that takes no constants
/// (`resolve`, `rewards_for`, `xp_loss_for`, `add_experience`) reads these.
pub fn default_constants() -> &'static GameConstants {
    DEFAULT_CONSTANTS.get_or_init(|| {
        let toml = include_str!("../../config/game_constants.toml");
        parse_toml::<GameConstants>(toml)
            .and_then(|c| c.validate().map(|_| c))
            .unwrap_or_else(|err| {
                tracing::warn!("bundled game constants rejected ({}), using built-in defaults", err);
                GameConstants::default()
            })
    })
}
