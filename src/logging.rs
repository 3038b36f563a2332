use std::fs::{self, OpenOptions};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::AppError;

/// Initialize tracing with file output.
///
/// Stdout belongs to the TUI, so nothing is installed unless a log file is
/// configured. `RUST_LOG` takes precedence over the configured level.
/// Returns whether a subscriber was installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, AppError> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|err| AppError::Logging {
            message: format!("invalid level '{}': {}", config.level, err),
        })?,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| AppError::Logging {
            message: format!("cannot create '{}': {}", parent.display(), err),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| AppError::Logging {
            message: format!("cannot open '{}': {}", path.display(), err),
        })?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|err| AppError::Logging {
            message: err.to_string(),
        })?;

    Ok(true)
}
