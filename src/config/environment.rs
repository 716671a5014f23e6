// ABOUTME: Environment configuration for the AI credential, model, and transport settings
// ABOUTME: Loads CoachConfig from environment variables and fails fast when the API key is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration.
//!
//! Configuration is environment-only. The one required value is the Gemini
//! credential; without it the application refuses to start.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use tracing::info;

use super::types::ImageMimePolicy;
use crate::errors::{AppError, AppResult};

/// Primary environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Legacy variable name accepted as a fallback
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// Model override
pub const MODEL_ENV: &str = "RUN_COACH_MODEL";

/// API base URL override (used to point at a mock server in tests)
pub const API_BASE_URL_ENV: &str = "RUN_COACH_API_BASE_URL";

/// Optional request timeout in seconds; unset means no timeout
pub const HTTP_TIMEOUT_ENV: &str = "RUN_COACH_HTTP_TIMEOUT_SECS";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for the Gemini client
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key (never logged)
    pub api_key: String,
    /// Model used for every request
    pub model: String,
    /// REST base URL
    pub base_url: String,
    /// Request timeout; `None` leaves the transport default (no timeout)
    pub request_timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Build a config with defaults around an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: None,
        }
    }
}

impl Debug for GeminiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Top-level application configuration
///
/// Log level and deployment environment are owned by
/// [`crate::logging::LoggingConfig`], which reads them before this loads.
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Gemini client settings
    pub gemini: GeminiConfig,
    /// How screenshots are labelled
    pub image_mime_policy: ImageMimePolicy,
}

impl CoachConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if neither `GEMINI_API_KEY` nor `API_KEY` is
    /// set, and `ConfigInvalid` for an unparsable timeout.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`CoachConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(GEMINI_API_KEY_ENV)
            .or_else(|| non_empty(LEGACY_API_KEY_ENV))
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{GEMINI_API_KEY_ENV} environment variable not set"
                ))
            })?;

        let request_timeout = non_empty(HTTP_TIMEOUT_ENV)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        let gemini = GeminiConfig {
            api_key,
            model: non_empty(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            base_url: non_empty(API_BASE_URL_ENV)
                .map_or_else(|| DEFAULT_API_BASE_URL.to_owned(), |url| {
                    url.trim_end_matches('/').to_owned()
                }),
            request_timeout,
        };

        Ok(Self {
            gemini,
            image_mime_policy: non_empty(ImageMimePolicy::ENV_VAR)
                .map(|flag| ImageMimePolicy::from_flag(&flag))
                .unwrap_or_default(),
        })
    }

    /// Log a redacted summary of the loaded configuration
    pub fn log_summary(&self) {
        info!(
            model = %self.gemini.model,
            base_url = %self.gemini.base_url,
            timeout_secs = ?self.gemini.request_timeout.map(|t| t.as_secs()),
            image_mime_policy = ?self.image_mime_policy,
            "Run Coach configuration loaded"
        );
    }
}

fn parse_timeout(raw: &str) -> AppResult<Duration> {
    let seconds: u64 = raw.trim().parse().map_err(|_| {
        AppError::config_invalid(format!(
            "{HTTP_TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
        ))
    })?;
    if seconds == 0 {
        return Err(AppError::config_invalid(format!(
            "{HTTP_TIMEOUT_ENV} must be greater than zero"
        )));
    }
    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_timeout_rejects_zero_and_garbage() {
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
        assert_eq!(parse_timeout(" 30 ").unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_legacy_key_is_accepted() {
        let config = CoachConfig::from_lookup(lookup_from(&[("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.gemini.api_key, "legacy");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = CoachConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("RUN_COACH_API_BASE_URL", "http://127.0.0.1:9000/v1beta/"),
        ]))
        .unwrap();
        assert_eq!(config.gemini.base_url, "http://127.0.0.1:9000/v1beta");
    }
}
