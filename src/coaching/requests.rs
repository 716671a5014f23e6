// ABOUTME: Typed coaching requests and the builders that turn them into model requests
// ABOUTME: Pairs each request kind with its system instruction, user prompt and image order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ImageMimePolicy;
use crate::constants::limits;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::images::ImagePayload;
use crate::llm::prompts;
use crate::llm::{ChatRequest, MessagePart, ResponseFormat};
use crate::models::{BodyArea, ManualData, RequestKind};

/// A fully collected submission, one variant per request kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoachingRequest {
    /// Training plan from a run screenshot
    TrainingFromImage {
        /// The screenshot
        image: ImagePayload,
        /// Race goal
        goal: String,
        /// Weeks until the race
        weeks_to_race: u32,
    },
    /// Training plan from manual stats
    TrainingFromManual {
        /// Runner stats
        data: ManualData,
        /// Race goal
        goal: String,
        /// Weeks until the race
        weeks_to_race: u32,
    },
    /// Recovery routine for a body area
    Recovery {
        /// Focus area
        focus_area: BodyArea,
        /// Optional muscle detail; empty means none
        specific_muscle: String,
    },
    /// Progress analysis across screenshots, oldest first
    Progress {
        /// Screenshots in upload order
        images: Vec<ImagePayload>,
    },
    /// Feedback on a single run
    RecentRun {
        /// The screenshot
        image: ImagePayload,
    },
}

impl CoachingRequest {
    /// Request kind
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::TrainingFromImage { .. } => RequestKind::TrainingFromImage,
            Self::TrainingFromManual { .. } => RequestKind::TrainingFromManual,
            Self::Recovery { .. } => RequestKind::Recovery,
            Self::Progress { .. } => RequestKind::Progress,
            Self::RecentRun { .. } => RequestKind::RecentRun,
        }
    }

    /// Check the submission precondition for this kind
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` or `ValueOutOfRange` describing the first
    /// unmet condition.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            Self::TrainingFromImage {
                goal,
                weeks_to_race,
                ..
            } => validate_goal_and_weeks(goal, *weeks_to_race),
            Self::TrainingFromManual {
                data,
                goal,
                weeks_to_race,
            } => {
                if let Some(field) = data.missing_fields().first() {
                    return Err(AppError::missing_field(field));
                }
                validate_goal_and_weeks(goal, *weeks_to_race)
            }
            Self::Recovery { focus_area, .. } => {
                if focus_area.is_selected() {
                    Ok(())
                } else {
                    Err(AppError::missing_field("focus area"))
                }
            }
            Self::Progress { images } => validate_progress_count(images.len()),
            Self::RecentRun { .. } => Ok(()),
        }
    }

    /// Build the model request
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the manual runner data cannot be encoded.
    pub fn to_chat_request(&self, policy: ImageMimePolicy) -> AppResult<ChatRequest> {
        match self {
            Self::TrainingFromImage {
                image,
                goal,
                weeks_to_race,
            } => Ok(training_from_image(image, goal, *weeks_to_race, policy)),
            Self::TrainingFromManual {
                data,
                goal,
                weeks_to_race,
            } => training_from_manual(data, goal, *weeks_to_race),
            Self::Recovery {
                focus_area,
                specific_muscle,
            } => Ok(recovery(focus_area, specific_muscle)),
            Self::Progress { images } => Ok(progress(images, policy)),
            Self::RecentRun { image } => Ok(recent_run(image, policy)),
        }
    }
}

/// Parse a typed week count; `None` for anything but a whole number in range
#[must_use]
pub fn parse_weeks_to_race(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|weeks| (limits::MIN_WEEKS_TO_RACE..=limits::MAX_WEEKS_TO_RACE).contains(weeks))
}

/// Goal must be non-blank and the week count inside the allowed range
///
/// # Errors
///
/// Returns `MissingRequiredField` for a blank goal and `ValueOutOfRange` for
/// a week count outside 1..=52.
pub fn validate_goal_and_weeks(goal: &str, weeks_to_race: u32) -> AppResult<()> {
    if goal.trim().is_empty() {
        return Err(AppError::missing_field("goal"));
    }
    if !(limits::MIN_WEEKS_TO_RACE..=limits::MAX_WEEKS_TO_RACE).contains(&weeks_to_race) {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!(
                "weeks to race must be between {} and {}, got {weeks_to_race}",
                limits::MIN_WEEKS_TO_RACE,
                limits::MAX_WEEKS_TO_RACE
            ),
        ));
    }
    Ok(())
}

/// Progress analysis needs at least two screenshots
///
/// # Errors
///
/// Returns `InvalidInput` when fewer than two images are supplied.
pub fn validate_progress_count(count: usize) -> AppResult<()> {
    if count < limits::MIN_PROGRESS_IMAGES {
        return Err(AppError::invalid_input(format!(
            "progress analysis needs at least {} screenshots, got {count}",
            limits::MIN_PROGRESS_IMAGES
        )));
    }
    Ok(())
}

fn image_part(image: &ImagePayload, policy: ImageMimePolicy) -> MessagePart {
    MessagePart::inline_image(image.declared_mime(policy), image.data.clone())
}

fn json_request(parts: Vec<MessagePart>, system_prompt: &str) -> ChatRequest {
    ChatRequest::new(parts)
        .with_system_instruction(system_prompt)
        .with_response_format(ResponseFormat::Json)
}

/// Training plan from a screenshot: image first, then the prompt
#[must_use]
pub fn training_from_image(
    image: &ImagePayload,
    goal: &str,
    weeks_to_race: u32,
    policy: ImageMimePolicy,
) -> ChatRequest {
    json_request(
        vec![
            image_part(image, policy),
            MessagePart::text(prompts::training_from_image_prompt(goal, weeks_to_race)),
        ],
        prompts::TRAINING_SYSTEM_PROMPT,
    )
}

/// Training plan from manual stats: text only
///
/// # Errors
///
/// Returns a serialization error if the runner data cannot be encoded.
pub fn training_from_manual(
    data: &ManualData,
    goal: &str,
    weeks_to_race: u32,
) -> AppResult<ChatRequest> {
    Ok(json_request(
        vec![MessagePart::text(prompts::training_from_manual_prompt(
            data,
            goal,
            weeks_to_race,
        )?)],
        prompts::TRAINING_SYSTEM_PROMPT,
    ))
}

/// Recovery routine: text only
#[must_use]
pub fn recovery(focus_area: &BodyArea, specific_muscle: &str) -> ChatRequest {
    json_request(
        vec![MessagePart::text(prompts::recovery_prompt(
            focus_area.label(),
            specific_muscle,
        ))],
        prompts::RECOVERY_SYSTEM_PROMPT,
    )
}

/// Progress analysis: the prompt, then every image in upload order
#[must_use]
pub fn progress(images: &[ImagePayload], policy: ImageMimePolicy) -> ChatRequest {
    let mut parts = Vec::with_capacity(images.len() + 1);
    parts.push(MessagePart::text(prompts::PROGRESS_USER_PROMPT));
    parts.extend(images.iter().map(|image| image_part(image, policy)));
    json_request(parts, prompts::PROGRESS_SYSTEM_PROMPT)
}

/// Recent-run analysis: image first, then the prompt
#[must_use]
pub fn recent_run(image: &ImagePayload, policy: ImageMimePolicy) -> ChatRequest {
    json_request(
        vec![
            image_part(image, policy),
            MessagePart::text(prompts::RECENT_RUN_USER_PROMPT),
        ],
        prompts::RECENT_RUN_SYSTEM_PROMPT,
    )
}
