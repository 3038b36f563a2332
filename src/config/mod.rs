//! Configuration module.
//!
//! Provides TOML-based configuration loading with validation.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, InitialScreen, LoggingConfig, UiConfig};
