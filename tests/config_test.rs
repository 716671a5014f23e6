// ABOUTME: Tests for environment-driven configuration loading
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use run_coach::config::{CoachConfig, ImageMimePolicy};
use run_coach::errors::ErrorCode;
use serial_test::serial;

const VARS: [&str; 6] = [
    "GEMINI_API_KEY",
    "API_KEY",
    "RUN_COACH_MODEL",
    "RUN_COACH_API_BASE_URL",
    "RUN_COACH_HTTP_TIMEOUT_SECS",
    "RUN_COACH_DETECT_IMAGE_MIME",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_missing_key_is_config_missing() {
    clear_env();
    let err = CoachConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("GEMINI_API_KEY"));
}

#[test]
#[serial]
fn test_defaults_with_only_a_key() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "k-123");

    let config = CoachConfig::from_env().unwrap();
    assert_eq!(config.gemini.api_key, "k-123");
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(
        config.gemini.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert!(config.gemini.request_timeout.is_none());
    assert_eq!(config.image_mime_policy, ImageMimePolicy::AlwaysJpeg);
    assert!(!format!("{config:?}").contains("k-123"));

    clear_env();
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("API_KEY", "legacy");
    env::set_var("RUN_COACH_MODEL", "gemini-2.5-pro");
    env::set_var("RUN_COACH_API_BASE_URL", "http://localhost:9000/v1beta/");
    env::set_var("RUN_COACH_HTTP_TIMEOUT_SECS", "45");
    env::set_var("RUN_COACH_DETECT_IMAGE_MIME", "true");

    let config = CoachConfig::from_env().unwrap();
    assert_eq!(config.gemini.api_key, "legacy");
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.base_url, "http://localhost:9000/v1beta");
    assert_eq!(config.gemini.request_timeout, Some(Duration::from_secs(45)));
    assert_eq!(config.image_mime_policy, ImageMimePolicy::Detected);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_timeout_is_config_invalid() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "k");
    env::set_var("RUN_COACH_HTTP_TIMEOUT_SECS", "soon");

    let err = CoachConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_env();
}
