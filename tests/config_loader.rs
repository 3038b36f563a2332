use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use recursive_nav::cli::Cli;
use recursive_nav::config::{Config, ConfigError, InitialScreen};
use recursive_nav::error::AppError;
use recursive_nav::ui::screen::ScreenState;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.ui.initial_screen, InitialScreen::Operators);
    assert_eq!(config.ui.tick_interval(), Duration::from_secs(1));
    assert_eq!(config.ui.detail_split_percent, 40);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("recursive-nav/config.toml"));
}

/// Test that a missing file falls back to defaults.
#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("load");
    assert_eq!(config, Config::default());
}

/// Test that omitted sections and fields keep their defaults.
#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[ui]
initial_screen = "counter"
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.initial_screen, InitialScreen::Counter);
    assert_eq!(config.ui.tick_interval_ms, 1000);
    assert_eq!(config.logging, Default::default());
    assert!(matches!(config.ui.initial_screen.state(), ScreenState::Counter(_)));
}

#[test]
fn test_full_file_is_parsed() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[ui]
initial_screen = "operators"
tick_interval_ms = 250
detail_split_percent = 50

[logging]
level = "debug"
file = "/tmp/recursive-nav.log"
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_interval(), Duration::from_millis(250));
    assert_eq!(config.ui.detail_split_percent, 50);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/recursive-nav.log"))
    );
}

/// Test that a zero tick interval is rejected.
#[test]
fn test_validation_fails_zero_tick() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[ui]\ntick_interval_ms = 0\n");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("tick_interval_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_split_out_of_range() {
    let mut config = Config::default();
    config.ui.detail_split_percent = 95;

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("detail_split_percent"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[ui\ninitial_screen = ");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_unknown_initial_screen_is_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[ui]\ninitial_screen = \"settings\"\n");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// Test that command line flags override the file.
#[test]
fn test_cli_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[ui]\ntick_interval_ms = 500\n");

    let cli = Cli {
        config: Some(path),
        screen: Some(InitialScreen::Counter),
        tick_ms: Some(100),
        log_file: None,
    };
    let config = cli.load_config().expect("load");
    assert_eq!(config.ui.initial_screen, InitialScreen::Counter);
    assert_eq!(config.ui.tick_interval_ms, 100);
}

/// Test that an override is validated like the file itself.
#[test]
fn test_cli_zero_tick_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let cli = Cli {
        config: Some(dir.path().join("absent.toml")),
        tick_ms: Some(0),
        ..Cli::default()
    };

    assert!(matches!(
        cli.load_config(),
        Err(AppError::Config(ConfigError::ValidationError { .. }))
    ));
}

/// Test that a malformed config surfaces as an application config error.
#[test]
fn test_cli_malformed_file_is_config_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[ui\n");
    let cli = Cli {
        config: Some(path),
        ..Cli::default()
    };

    let err = cli.load_config().expect_err("malformed config");
    assert!(matches!(err, AppError::Config(ConfigError::ParseError { .. })));
}
