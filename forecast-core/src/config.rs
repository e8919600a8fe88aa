use crate::error::{ForecastError, Result};

/// Environment variable holding the Visual Crossing API key.
pub const API_KEY_VAR: &str = "VISUAL_CROSSING_API_KEY";

/// Runtime configuration, resolved once at startup by the entry point and
/// passed into the provider client explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Read the API credential from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_api_key(std::env::var(API_KEY_VAR).ok())
    }

    /// Build a config from a raw key value. A blank value counts as missing.
    pub fn from_api_key(api_key: Option<String>) -> Result<Self> {
        match api_key {
            Some(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(ForecastError::MissingCredential),
        }
    }
}
