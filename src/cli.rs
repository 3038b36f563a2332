use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, InitialScreen};
use crate::error::AppError;

/// Recursive navigation demo: counters and operators presenting each other.
#[derive(Debug, Default, Parser)]
#[command(name = "recursive-nav", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen shown at startup
    #[arg(long, value_enum)]
    pub screen: Option<InitialScreen>,

    /// Counter tick period in milliseconds
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command line overrides on top.
    pub fn load_config(&self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(screen) = self.screen {
            config.ui.initial_screen = screen;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.ui.tick_interval_ms = tick_ms;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
