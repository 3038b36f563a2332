use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures of the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}
