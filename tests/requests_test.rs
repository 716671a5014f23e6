// ABOUTME: Tests for coaching request validation and the model requests they build
// ABOUTME: Checks prompts, system instructions, JSON mode and attachment order per request kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs)]

mod common;

use run_coach::coaching::{parse_weeks_to_race, CoachingRequest};
use run_coach::config::ImageMimePolicy;
use run_coach::errors::ErrorCode;
use run_coach::llm::prompts;
use run_coach::llm::{MessagePart, ResponseFormat};
use run_coach::models::{BodyArea, FitnessLevel, ManualData, RequestKind, ResultKind};

fn mime_of(part: &MessagePart) -> &str {
    match part {
        MessagePart::InlineImage { mime_type, .. } => mime_type.as_str(),
        MessagePart::Text { .. } => panic!("expected an image part"),
    }
}

// ============================================================================
// Week parsing and validation
// ============================================================================

#[test]
fn test_parse_weeks_to_race_bounds() {
    assert_eq!(parse_weeks_to_race("1"), Some(1));
    assert_eq!(parse_weeks_to_race(" 52 "), Some(52));
    assert_eq!(parse_weeks_to_race("0"), None);
    assert_eq!(parse_weeks_to_race("53"), None);
    assert_eq!(parse_weeks_to_race("-4"), None);
    assert_eq!(parse_weeks_to_race("8.5"), None);
    assert_eq!(parse_weeks_to_race(""), None);
}

#[test]
fn test_validate_reports_first_unmet_condition() {
    let image = common::jpeg_payload("run.jpg");
    let blank_goal = CoachingRequest::TrainingFromImage {
        image: image.clone(),
        goal: "  ".into(),
        weeks_to_race: 8,
    };
    assert_eq!(
        blank_goal.validate().unwrap_err().code,
        ErrorCode::MissingRequiredField
    );

    let too_long = CoachingRequest::TrainingFromImage {
        image,
        goal: "marathon".into(),
        weeks_to_race: 60,
    };
    assert_eq!(
        too_long.validate().unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let manual = CoachingRequest::TrainingFromManual {
        data: ManualData::default(),
        goal: "marathon".into(),
        weeks_to_race: 12,
    };
    let err = manual.validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("age"));

    let progress = CoachingRequest::Progress {
        images: vec![common::jpeg_payload("a.jpg")],
    };
    assert_eq!(progress.validate().unwrap_err().code, ErrorCode::InvalidInput);

    let recovery = CoachingRequest::Recovery {
        focus_area: BodyArea::Other(String::new()),
        specific_muscle: String::new(),
    };
    assert!(recovery.validate().is_err());
}

// ============================================================================
// Request shapes
// ============================================================================

#[test]
fn test_training_from_image_sends_image_then_prompt() {
    let request = CoachingRequest::TrainingFromImage {
        image: common::png_payload("run.png"),
        goal: "sub-50 10k".into(),
        weeks_to_race: 6,
    };
    assert_eq!(request.kind(), RequestKind::TrainingFromImage);
    assert_eq!(request.kind().result_kind(), ResultKind::TrainingPlan);

    let chat = request.to_chat_request(ImageMimePolicy::AlwaysJpeg).unwrap();
    assert_eq!(chat.parts.len(), 2);
    assert_eq!(mime_of(&chat.parts[0]), "image/jpeg");
    assert_eq!(
        chat.parts[1].as_text().unwrap(),
        prompts::training_from_image_prompt("sub-50 10k", 6)
    );
    assert_eq!(chat.response_format, ResponseFormat::Json);
    assert_eq!(
        chat.system_instruction.as_deref(),
        Some(prompts::TRAINING_SYSTEM_PROMPT)
    );
}

#[test]
fn test_detected_policy_sends_real_mime() {
    let request = CoachingRequest::RecentRun {
        image: common::png_payload("run.png"),
    };
    let chat = request.to_chat_request(ImageMimePolicy::Detected).unwrap();
    assert_eq!(mime_of(&chat.parts[0]), "image/png");
}

#[test]
fn test_manual_request_is_text_only_with_runner_json() {
    let data = ManualData {
        age: "45".into(),
        height: "180".into(),
        weight: "82".into(),
        fitness_level: FitnessLevel::Beginner,
        recent_run: "5k in 32 minutes".into(),
    };
    let request = CoachingRequest::TrainingFromManual {
        data,
        goal: "first 10k".into(),
        weeks_to_race: 10,
    };
    let chat = request.to_chat_request(ImageMimePolicy::AlwaysJpeg).unwrap();

    assert_eq!(chat.image_count(), 0);
    assert_eq!(
        chat.prompt_text(),
        "Based on the following runner data, create a 10-week training plan.\n    - Runner Data: {\"age\":\"45\",\"height\":\"180\",\"weight\":\"82\",\"fitnessLevel\":\"beginner\",\"recentRun\":\"5k in 32 minutes\"}\n    - Goal: \"first 10k\"\n    - Weeks to Race: 10"
    );
}

#[test]
fn test_recovery_request_uses_none_specified_placeholder() {
    let request = CoachingRequest::Recovery {
        focus_area: BodyArea::UpperLegs,
        specific_muscle: String::new(),
    };
    let chat = request.to_chat_request(ImageMimePolicy::AlwaysJpeg).unwrap();
    assert_eq!(chat.image_count(), 0);
    assert_eq!(
        chat.prompt_text(),
        "Create a recovery and stretching routine.\n    - Focus Area: Upper Legs\n    - Specific Muscle/Area (if any): None specified"
    );
    assert_eq!(
        chat.system_instruction.as_deref(),
        Some(prompts::RECOVERY_SYSTEM_PROMPT)
    );
}

#[test]
fn test_progress_request_sends_prompt_then_images_in_order() {
    let images = vec![
        common::jpeg_payload("1.jpg"),
        common::png_payload("2.png"),
        common::jpeg_payload("3.jpg"),
    ];
    let request = CoachingRequest::Progress { images };
    let chat = request.to_chat_request(ImageMimePolicy::Detected).unwrap();

    assert_eq!(chat.parts.len(), 4);
    assert_eq!(chat.parts[0].as_text(), Some(prompts::PROGRESS_USER_PROMPT));
    let mimes: Vec<&str> = chat.parts[1..].iter().map(mime_of).collect();
    assert_eq!(mimes, ["image/jpeg", "image/png", "image/jpeg"]);
    assert_eq!(
        chat.system_instruction.as_deref(),
        Some(prompts::PROGRESS_SYSTEM_PROMPT)
    );
}

#[test]
fn test_recent_run_request_sends_image_then_prompt() {
    let request = CoachingRequest::RecentRun {
        image: common::jpeg_payload("run.jpg"),
    };
    let chat = request.to_chat_request(ImageMimePolicy::AlwaysJpeg).unwrap();
    assert!(chat.parts[0].is_image());
    assert_eq!(chat.parts[1].as_text(), Some(prompts::RECENT_RUN_USER_PROMPT));
    assert_eq!(
        chat.system_instruction.as_deref(),
        Some(prompts::RECENT_RUN_SYSTEM_PROMPT)
    );
}
