//! Logging Tests

use sia_domain::error::Error;
use sia_infrastructure::constants::DEFAULT_LOG_LEVEL;
use sia_infrastructure::logging::{LoggingConfig, init_logging, level_filter, parse_log_level};
use tracing::Level;
use tracing::level_filters::LevelFilter;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
}

#[test]
fn test_invalid_level_fails_before_install() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        json_format: false,
    };
    assert!(matches!(
        init_logging(&config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_second_initialization_is_an_error() {
    let config = LoggingConfig::default();
    // The first call may already fail if another test installed a subscriber
    let _ = init_logging(&config);
    assert!(matches!(
        init_logging(&config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_warning_alias_filters_at_warn() {
    let level = parse_log_level("warning").expect("warning is a valid level");
    let filter = level_filter(level);
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn test_level_filter_matches_parsed_level() {
    for (name, expected) in [
        ("trace", LevelFilter::TRACE),
        ("DEBUG", LevelFilter::DEBUG),
        ("info", LevelFilter::INFO),
        ("error", LevelFilter::ERROR),
    ] {
        let level = parse_log_level(name).expect("valid level");
        assert_eq!(level_filter(level).max_level_hint(), Some(expected), "{name}");
    }
}
