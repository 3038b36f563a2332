use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::counter::CounterState;
use crate::ui::operators::OperatorsState;
use crate::ui::screen::ScreenState;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen shown at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InitialScreen {
    Counter,
    #[default]
    Operators,
}

impl InitialScreen {
    pub fn state(self) -> ScreenState {
        match self {
            InitialScreen::Counter => ScreenState::Counter(CounterState::default()),
            InitialScreen::Operators => ScreenState::Operators(OperatorsState::default()),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub initial_screen: InitialScreen,
    /// Counter tick period in milliseconds (default: 1000).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Width of the detail column in percent (default: 40).
    #[serde(default = "default_detail_split_percent")]
    pub detail_split_percent: u16,
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Log output settings. Logging stays off unless `file` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_detail_split_percent() -> u16 {
    40
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_screen: InitialScreen::default(),
            tick_interval_ms: default_tick_interval_ms(),
            detail_split_percent: default_detail_split_percent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
