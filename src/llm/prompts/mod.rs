// ABOUTME: System instructions and user prompt templates for each coaching request
// ABOUTME: System instructions are markdown files loaded at compile time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Each result shape has one system instruction that fixes the coach persona
//! and the exact JSON contract. User prompts are short templates filled from
//! the form values.

use crate::errors::AppResult;
use crate::models::ManualData;

/// Training plan system instruction (both image and manual input)
pub const TRAINING_SYSTEM_PROMPT: &str = include_str!("training_system.md");

/// Recovery routine system instruction
pub const RECOVERY_SYSTEM_PROMPT: &str = include_str!("recovery_system.md");

/// Progress analysis system instruction
pub const PROGRESS_SYSTEM_PROMPT: &str = include_str!("progress_system.md");

/// Recent-run analysis system instruction
pub const RECENT_RUN_SYSTEM_PROMPT: &str = include_str!("recent_run_system.md");

/// User prompt for progress analysis; images follow in upload order
pub const PROGRESS_USER_PROMPT: &str = "Analyze my running progress based on the following run screenshots provided in order. Identify trends in my performance (like pace, distance, heart rate etc.), explain what these trends mean, and provide specific, actionable recommendations for my future training. Structure your analysis in the specified JSON format.";

/// User prompt for a single recent run
pub const RECENT_RUN_USER_PROMPT: &str =
    "Analyze the attached screenshot of my recent run and provide feedback on my performance.";

/// Placeholder used when no specific muscle was given
pub const NO_SPECIFIC_MUSCLE: &str = "None specified";

/// Prompt sent after the screenshot when planning from an image
#[must_use]
pub fn training_from_image_prompt(goal: &str, weeks_to_race: u32) -> String {
    format!(
        "Based on the attached screenshot of run data, create a {weeks_to_race}-week training plan for this goal: \"{goal}\"."
    )
}

/// Prompt embedding the manual runner data as JSON
///
/// # Errors
///
/// Returns a serialization error if the runner data cannot be encoded.
pub fn training_from_manual_prompt(
    data: &ManualData,
    goal: &str,
    weeks_to_race: u32,
) -> AppResult<String> {
    let runner_json = serde_json::to_string(data)?;
    Ok(format!(
        "Based on the following runner data, create a {weeks_to_race}-week training plan.\n    - Runner Data: {runner_json}\n    - Goal: \"{goal}\"\n    - Weeks to Race: {weeks_to_race}"
    ))
}

/// Prompt for a recovery routine; an empty muscle becomes "None specified"
#[must_use]
pub fn recovery_prompt(focus_area: &str, specific_muscle: &str) -> String {
    let muscle = if specific_muscle.is_empty() {
        NO_SPECIFIC_MUSCLE
    } else {
        specific_muscle
    };
    format!(
        "Create a recovery and stretching routine.\n    - Focus Area: {focus_area}\n    - Specific Muscle/Area (if any): {muscle}"
    )
}
