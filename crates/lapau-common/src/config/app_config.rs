//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub seed: SeedConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Slice store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per persisted slice
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Pretty-print the slice files (handy when inspecting by hand)
    #[serde(default)]
    pub pretty: bool,
}

/// First-run seeding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

// Default value functions
fn default_app_name() -> String {
    "lapau".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_seed_enabled() -> bool {
    true
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every field has a default, so this never fails on a clean
    /// environment; it only refuses malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(s) => match s.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                other => {
                    return Err(ConfigError::InvalidValue("APP_ENV", other.to_string()));
                }
            },
            Err(_) => Environment::default(),
        };

        let pretty = match env::var("LAPAU_STORE_PRETTY") {
            Ok(s) => parse_bool(&s)
                .ok_or_else(|| ConfigError::InvalidValue("LAPAU_STORE_PRETTY", s.clone()))?,
            Err(_) => false,
        };

        let seed_enabled = match env::var("LAPAU_SEED") {
            Ok(s) => {
                parse_bool(&s).ok_or_else(|| ConfigError::InvalidValue("LAPAU_SEED", s.clone()))?
            }
            Err(_) => default_seed_enabled(),
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            storage: StorageConfig {
                data_dir: env::var("LAPAU_DATA_DIR").unwrap_or_else(|_| default_data_dir()),
                pretty,
            },
            seed: SeedConfig {
                enabled: seed_enabled,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
