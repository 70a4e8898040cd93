// ABOUTME: Unit tests for logging configuration
// ABOUTME: Tests log format parsing, verbose level handling and filter construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ricettario::logging::{LogFormat, LoggingConfig};

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_param("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_param(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::from_str_param("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_param("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_param("fancy"), LogFormat::Pretty);
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "ricettario");
    assert!(!config.include_location);
}

#[test]
fn test_verbose_raises_plain_levels_only() {
    let config = LoggingConfig::default().verbose();
    assert_eq!(config.level, "debug");

    let custom = LoggingConfig {
        level: "ricettario_engine=trace".to_owned(),
        ..LoggingConfig::default()
    };
    assert_eq!(custom.verbose().level, "ricettario_engine=trace");
}

#[test]
fn test_env_filter_includes_base_level() {
    let filter = LoggingConfig::default().env_filter();
    let rendered = filter.to_string();
    assert!(rendered.contains("info"), "{rendered}");
    assert!(rendered.contains("rayon_core=warn"), "{rendered}");
}
