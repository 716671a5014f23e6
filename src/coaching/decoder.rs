// ABOUTME: Decodes raw model text into typed coaching results
// ABOUTME: Strips an optional fenced code wrapper, parses JSON, then checks the typed shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Response decoding.
//!
//! Decoding happens in three steps, each with its own failure kind:
//!
//! 1. syntax: the text (after fence stripping) must be JSON, otherwise
//!    `InvalidFormat` with the uniform "not in the expected format" message;
//! 2. presence: a JSON `null` is an `EmptyResponse` with a per-kind message;
//! 3. shape: the value must deserialize into the expected record, otherwise
//!    `ResponseSchemaMismatch`.
//!
//! The offending text is logged, never returned to the caller.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{
    CoachingResult, ProgressAnalysis, RecentRunAnalysis, RecoveryPlan, ResultKind, TrainingPlan,
};

/// Opening fence with optional language tag, lazy body, closing fence at the very end
static FENCE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").ok());

/// Byte order mark some responses start with; `str::trim` keeps it
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trim the text and unwrap a surrounding fenced code block, if any
///
/// Whitespace and byte order marks are trimmed from both ends. A fence with
/// an empty body leaves the trimmed text as-is.
#[must_use]
pub fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    FENCE_PATTERN
        .as_ref()
        .and_then(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(2))
        .map(|body| body.as_str())
        .filter(|body| !body.is_empty())
        .map_or(trimmed, str::trim)
}

/// Decode model text into `T`
///
/// # Errors
///
/// Returns `InvalidFormat`, `EmptyResponse` or `ResponseSchemaMismatch` as
/// described in the module docs.
pub fn decode_response<T: DeserializeOwned>(text: &str, kind: ResultKind) -> AppResult<T> {
    let candidate = strip_fences(text);

    let value: Value = serde_json::from_str(candidate).map_err(|e| {
        error!(
            result_kind = %kind,
            error = %e,
            raw = %candidate,
            "Failed to parse JSON response"
        );
        AppError::unexpected_format().with_source(e)
    })?;

    if value.is_null() {
        warn!(result_kind = %kind, "Model returned a null result");
        return Err(AppError::empty_response(kind.empty_message()));
    }

    serde_json::from_value(value).map_err(|e| {
        error!(
            result_kind = %kind,
            error = %e,
            raw = %candidate,
            "Response did not match the expected structure"
        );
        AppError::schema_mismatch(e.to_string())
    })
}

/// Decode model text into the result variant for `kind`
///
/// # Errors
///
/// Same as [`decode_response`].
pub fn decode_result(text: &str, kind: ResultKind) -> AppResult<CoachingResult> {
    Ok(match kind {
        ResultKind::TrainingPlan => decode_response::<TrainingPlan>(text, kind)?.into(),
        ResultKind::RecoveryPlan => decode_response::<RecoveryPlan>(text, kind)?.into(),
        ResultKind::ProgressAnalysis => decode_response::<ProgressAnalysis>(text, kind)?.into(),
        ResultKind::RecentRunAnalysis => decode_response::<RecentRunAnalysis>(text, kind)?.into(),
    })
}
