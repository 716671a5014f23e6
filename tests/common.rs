// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides a recording LLM provider, image fixtures, and sample model responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `run_coach`

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use run_coach::coaching::CoachingService;
use run_coach::errors::AppError;
use run_coach::images::ImagePayload;
use run_coach::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use serde_json::json;

/// Minimal JPEG header bytes
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

/// Minimal PNG header bytes
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

/// Provider that replays scripted responses and records every request
pub struct RecordingProvider {
    responses: Mutex<VecDeque<Result<String, AppError>>>,
    requests: Mutex<Vec<ChatRequest>>,
    capabilities: LlmCapabilities,
}

impl Default for RecordingProvider {
    fn default() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            capabilities: LlmCapabilities::full_featured(),
        }
    }
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that answers once with `text`
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        let provider = Self::new();
        provider.push_text(text);
        Arc::new(provider)
    }

    /// Provider that fails once with `error`
    pub fn failing(error: AppError) -> Arc<Self> {
        let provider = Self::new();
        provider.responses.lock().unwrap().push_back(Err(error));
        Arc::new(provider)
    }

    pub fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn push_text(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn display_name(&self) -> &'static str {
        "Recording Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("no scripted response")));
        next.map(|content| ChatResponse {
            content,
            model: "test-model".to_owned(),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        })
    }
}

/// Service over a recording provider
pub fn service_with(provider: &Arc<RecordingProvider>) -> CoachingService {
    CoachingService::new(provider.clone())
}

pub fn jpeg_payload(name: &str) -> ImagePayload {
    ImagePayload::from_bytes(JPEG_BYTES, name).unwrap()
}

pub fn png_payload(name: &str) -> ImagePayload {
    ImagePayload::from_bytes(PNG_BYTES, name).unwrap()
}

/// Training plan JSON with `weeks` weeks of two days each
pub fn training_plan_json(weeks: u32) -> String {
    let weeks: Vec<_> = (1..=weeks)
        .map(|week| {
            json!({
                "week": week,
                "summary": format!("Week {week} focus"),
                "days": [
                    { "day": "Monday", "activity": "Rest", "details": "Full rest" },
                    { "day": "Tuesday", "activity": "Easy Run", "details": "6km conversational" }
                ]
            })
        })
        .collect();
    json!({
        "title": "Half Marathon Plan",
        "overview": "Build aerobic base then sharpen",
        "weeks": weeks
    })
    .to_string()
}

pub fn recovery_plan_json() -> String {
    json!({
        "title": "Post-Run Calf Recovery",
        "overview": "Loosen tight calves",
        "routines": [
            { "name": "Wall Calf Stretch", "description": "Lean into the wall", "duration": "2 sets of 30 seconds" }
        ]
    })
    .to_string()
}

pub fn progress_analysis_json() -> String {
    json!({
        "title": "Your Progress Analysis: Last 3 Runs",
        "summary": "Steady gains",
        "insights": [
            { "trend": "improvement", "observation": "Pace improved by 10s/km", "recommendation": "Add one tempo run" },
            { "trend": "mixed", "observation": "Heart rate varied", "recommendation": "Keep easy days easy" }
        ]
    })
    .to_string()
}

pub fn recent_run_analysis_json() -> String {
    json!({
        "title": "Analysis of Your Recent 10k Run",
        "overallSummary": "Strong and even effort",
        "metrics": [
            { "metric": "Pace", "value": "5:30 min/km", "feedback": "Consistent" },
            { "metric": "Cadence", "value": "175 spm", "feedback": "Efficient" }
        ]
    })
    .to_string()
}

/// Wrap text in a json code fence
pub fn fenced(text: &str) -> String {
    format!("```json\n{text}\n```")
}
