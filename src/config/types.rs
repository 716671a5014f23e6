// ABOUTME: Configuration type definitions shared across the config modules
// ABOUTME: Contains the ImageMimePolicy enum controlling how screenshots are labelled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// How uploaded screenshots are labelled when sent to the AI service
///
/// By default every screenshot is declared as `image/jpeg`, PNG and WEBP
/// included. `Detected` sends the sniffed type instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageMimePolicy {
    /// Declare every image as `image/jpeg`
    #[default]
    AlwaysJpeg,
    /// Declare the format detected from the file's magic bytes
    Detected,
}

impl ImageMimePolicy {
    /// Environment variable toggling MIME detection
    pub const ENV_VAR: &'static str = "RUN_COACH_DETECT_IMAGE_MIME";

    /// Parse the toggle value ("true"/"1" enables detection)
    #[must_use]
    pub fn from_flag(value: &str) -> Self {
        if value.eq_ignore_ascii_case("true") || value == "1" {
            Self::Detected
        } else {
            Self::AlwaysJpeg
        }
    }
}
