// ABOUTME: Tests for the Gemini provider against a wiremock stand-in for the generateContent API
// ABOUTME: Verifies the request wire format and the mapping of API failures to error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use run_coach::coaching::{CoachingRequest, CoachingService};
use run_coach::config::{GeminiConfig, ImageMimePolicy};
use run_coach::errors::ErrorCode;
use run_coach::llm::{ChatRequest, GeminiProvider, LlmProvider};
use run_coach::models::{BodyArea, CoachingResult};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn provider_at(base_url: String) -> GeminiProvider {
    let mut config = GeminiConfig::new("test-key");
    config.model = "gemini-test".into();
    config.base_url = base_url;
    GeminiProvider::new(config).unwrap()
}

fn provider_for(server: &MockServer) -> GeminiProvider {
    provider_at(format!("{}/v1beta", server.uri()))
}

/// Mount a single generateContent answer on a fresh mock server
async fn gemini_replying(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// JSON body of the only request the server received
async fn sent_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].body_json().unwrap()
}

fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 80, "totalTokenCount": 200 }
    })
}

fn recovery_chat(focus_area: BodyArea) -> ChatRequest {
    CoachingRequest::Recovery {
        focus_area,
        specific_muscle: String::new(),
    }
    .to_chat_request(ImageMimePolicy::AlwaysJpeg)
    .unwrap()
}

#[tokio::test]
async fn test_recovery_request_round_trip() {
    let server = gemini_replying(
        200,
        candidate_body(&common::fenced(&common::recovery_plan_json())),
    )
    .await;
    let service = CoachingService::new(Arc::new(provider_for(&server)));

    let request = CoachingRequest::Recovery {
        focus_area: BodyArea::LowerLegs,
        specific_muscle: "Calves".into(),
    };
    let result = service.generate(&request).await.unwrap();

    let CoachingResult::RecoveryPlan(plan) = result else {
        panic!("expected a recovery plan");
    };
    assert_eq!(plan.title, "Post-Run Calf Recovery");

    let body = sent_body(&server).await;
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert!(body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Rochys Run Coach"));
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Lower Legs"));
    assert!(prompt.contains("Calves"));
}

#[tokio::test]
async fn test_image_parts_are_sent_inline_in_order() {
    let server = gemini_replying(200, candidate_body(&common::recent_run_analysis_json())).await;
    let provider = provider_for(&server);
    let image = common::png_payload("run.png");

    let chat = CoachingRequest::RecentRun {
        image: image.clone(),
    }
    .to_chat_request(ImageMimePolicy::AlwaysJpeg)
    .unwrap();
    let response = provider.complete(&chat).await.unwrap();
    assert_eq!(response.model, "gemini-test");
    assert_eq!(response.usage.unwrap().total_tokens, 200);

    let body = sent_body(&server).await;
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
    assert_eq!(parts[0]["inlineData"]["data"], image.data.as_str());
    assert!(parts[1]["text"].is_string());
}

#[tokio::test]
async fn test_progress_images_follow_the_prompt() {
    let server = gemini_replying(200, candidate_body(&common::progress_analysis_json())).await;
    let provider = provider_for(&server);
    let images = vec![
        common::png_payload("1.png"),
        common::jpeg_payload("2.jpg"),
        common::png_payload("3.png"),
    ];

    let chat = CoachingRequest::Progress {
        images: images.clone(),
    }
    .to_chat_request(ImageMimePolicy::Detected)
    .unwrap();
    provider.complete(&chat).await.unwrap();

    let body = sent_body(&server).await;
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 4);
    assert!(parts[0]["text"].is_string());
    let mimes: Vec<&str> = parts[1..]
        .iter()
        .map(|part| part["inlineData"]["mimeType"].as_str().unwrap())
        .collect();
    assert_eq!(mimes, ["image/png", "image/jpeg", "image/png"]);
    assert_eq!(parts[2]["inlineData"]["data"], images[1].data.as_str());
}

#[tokio::test]
async fn test_rate_limit_maps_to_quota_message() {
    let body = json!({
        "error": {
            "code": 429,
            "message": "Quota exceeded for metric. Please retry in 6.406453963s.",
            "status": "RESOURCE_EXHAUSTED"
        }
    });
    let server = gemini_replying(429, body).await;
    let provider = provider_for(&server);

    let err = provider
        .complete(&recovery_chat(BodyArea::Core))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    assert_eq!(
        err.message,
        "AI service quota exceeded. Please try again in 7 seconds."
    );
}

#[tokio::test]
async fn test_rejected_key_maps_to_auth_failure() {
    let body = json!({
        "error": { "code": 403, "message": "API key not valid.", "status": "PERMISSION_DENIED" }
    });
    let server = gemini_replying(403, body).await;
    let provider = provider_for(&server);

    let err = provider
        .complete(&recovery_chat(BodyArea::UpperBody))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
}

#[tokio::test]
async fn test_server_error_maps_to_external_service_error() {
    let body = json!({ "error": { "code": 500, "message": "internal", "status": "INTERNAL" } });
    let server = gemini_replying(500, body).await;
    let service = CoachingService::new(Arc::new(provider_for(&server)));

    let err = service
        .generate(&CoachingRequest::Recovery {
            focus_area: BodyArea::Neck,
            specific_muscle: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.context.request_id.is_some());
    assert_eq!(
        err.user_message(),
        "An unknown error occurred. Please try again."
    );
}

#[tokio::test]
async fn test_unreachable_endpoint_is_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let provider = provider_at(format!("http://{addr}/v1beta"));

    let err = provider
        .complete(&recovery_chat(BodyArea::Hips))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_empty_candidates_is_external_error() {
    let server = gemini_replying(200, json!({ "candidates": [] })).await;
    let provider = provider_for(&server);

    let err = provider
        .complete(&recovery_chat(BodyArea::Arms))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}
