// ABOUTME: Application-wide constants for Run Coach organized by domain
// ABOUTME: User-facing messages, form limits, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded constants shared by the core models, the AI contract layer and
//! the controller.

/// User-facing messages shown in the error banner and loading screen
pub mod messages {
    /// Uniform decode failure for unparsable AI responses
    pub const UNEXPECTED_FORMAT: &str =
        "AI response was not in the expected format. Please try again.";

    /// Parsed AI response had the wrong shape
    pub const SCHEMA_MISMATCH: &str =
        "AI response did not match the expected structure. Please try again.";

    /// Training plan came back as `null`
    pub const EMPTY_PLAN: &str = "The generated plan was empty. Please try again.";

    /// Recovery routine came back as `null`
    pub const EMPTY_RECOVERY: &str = "The generated recovery routine was empty. Please try again.";

    /// Progress or recent-run analysis came back as `null`
    pub const EMPTY_ANALYSIS: &str = "The generated analysis was empty. Please try again.";

    /// Fallback banner for every non-decode failure
    pub const GENERIC_FAILURE: &str = "An unknown error occurred. Please try again.";

    /// Shown while a generation request is outstanding
    pub const GENERATING: &str = "Our AI coach is working its magic...";

    /// Footer disclaimer shown under every result
    pub const DISCLAIMER: &str =
        "Powered by AI. Always consult a doctor before starting a new fitness program.";
}

/// Input form limits
pub mod limits {
    /// Smallest accepted weeks-to-race value
    pub const MIN_WEEKS_TO_RACE: u32 = 1;

    /// Largest accepted weeks-to-race value
    pub const MAX_WEEKS_TO_RACE: u32 = 52;

    /// Progress analysis needs at least this many screenshots
    pub const MIN_PROGRESS_IMAGES: usize = 2;

    /// Uploads larger than this are rejected (10 MB)
    pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the Run Coach service
    pub const RUN_COACH: &str = "run-coach";

    /// Display name of the coaching brand used in prompts
    pub const COACH_BRAND: &str = "Rochys Run Coach";
}
