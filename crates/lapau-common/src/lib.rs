//! # lapau-common
//!
//! Shared utilities: configuration, telemetry, and the application
//! error type.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, Environment};
pub use error::AppError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
