// ABOUTME: Coaching service issuing exactly one model call per request and decoding the result
// ABOUTME: Wraps an LlmProvider with request validation, capability checks, and correlation ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::decoder::decode_response;
use super::requests::{self, CoachingRequest};
use crate::config::{CoachConfig, ImageMimePolicy};
use crate::errors::{AppError, AppResult};
use crate::images::ImagePayload;
use crate::llm::{ChatRequest, GeminiProvider, LlmProvider};
use crate::models::{
    BodyArea, CoachingResult, ManualData, ProgressAnalysis, RecentRunAnalysis, RecoveryPlan,
    RequestKind, TrainingPlan,
};

/// Entry point for the five coaching operations
///
/// Every call sends one request, with no retry. Failures carry the request's
/// correlation id in their context.
#[derive(Clone)]
pub struct CoachingService {
    provider: Arc<dyn LlmProvider>,
    mime_policy: ImageMimePolicy,
}

impl CoachingService {
    /// Create a service over any provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            mime_policy: ImageMimePolicy::default(),
        }
    }

    /// Create a service backed by Gemini from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &CoachConfig) -> AppResult<Self> {
        let provider = GeminiProvider::new(config.gemini.clone())?;
        Ok(Self::new(Arc::new(provider)).with_mime_policy(config.image_mime_policy))
    }

    /// Set how image MIME types are declared
    #[must_use]
    pub const fn with_mime_policy(mut self, policy: ImageMimePolicy) -> Self {
        self.mime_policy = policy;
        self
    }

    /// Current MIME policy
    #[must_use]
    pub const fn mime_policy(&self) -> ImageMimePolicy {
        self.mime_policy
    }

    /// Name of the underlying provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Dispatch any collected request to its operation
    ///
    /// # Errors
    ///
    /// Returns validation, transport, or decode errors from the operation.
    pub async fn generate(&self, request: &CoachingRequest) -> AppResult<CoachingResult> {
        request.validate()?;
        Ok(match request {
            CoachingRequest::TrainingFromImage {
                image,
                goal,
                weeks_to_race,
            } => self
                .analyze_run_data_from_image(image, goal, *weeks_to_race)
                .await?
                .into(),
            CoachingRequest::TrainingFromManual {
                data,
                goal,
                weeks_to_race,
            } => self
                .generate_plan_from_text(data, goal, *weeks_to_race)
                .await?
                .into(),
            CoachingRequest::Recovery {
                focus_area,
                specific_muscle,
            } => self
                .generate_recovery_routine(focus_area, specific_muscle)
                .await?
                .into(),
            CoachingRequest::Progress { images } => {
                self.analyze_progress_from_images(images).await?.into()
            }
            CoachingRequest::RecentRun { image } => {
                self.analyze_recent_run_image(image).await?.into()
            }
        })
    }

    /// Training plan from a run screenshot
    ///
    /// # Errors
    ///
    /// Returns validation, transport, or decode errors.
    pub async fn analyze_run_data_from_image(
        &self,
        image: &ImagePayload,
        goal: &str,
        weeks_to_race: u32,
    ) -> AppResult<TrainingPlan> {
        requests::validate_goal_and_weeks(goal, weeks_to_race)?;
        let chat = requests::training_from_image(image, goal, weeks_to_race, self.mime_policy);
        self.execute(RequestKind::TrainingFromImage, chat).await
    }

    /// Training plan from manually entered stats
    ///
    /// # Errors
    ///
    /// Returns validation, transport, or decode errors.
    pub async fn generate_plan_from_text(
        &self,
        data: &ManualData,
        goal: &str,
        weeks_to_race: u32,
    ) -> AppResult<TrainingPlan> {
        if let Some(field) = data.missing_fields().first() {
            return Err(AppError::missing_field(field));
        }
        requests::validate_goal_and_weeks(goal, weeks_to_race)?;
        let chat = requests::training_from_manual(data, goal, weeks_to_race)?;
        self.execute(RequestKind::TrainingFromManual, chat).await
    }

    /// Recovery and stretching routine
    ///
    /// # Errors
    ///
    /// Returns validation, transport, or decode errors.
    pub async fn generate_recovery_routine(
        &self,
        focus_area: &BodyArea,
        specific_muscle: &str,
    ) -> AppResult<RecoveryPlan> {
        if !focus_area.is_selected() {
            return Err(AppError::missing_field("focus area"));
        }
        let chat = requests::recovery(focus_area, specific_muscle);
        self.execute(RequestKind::Recovery, chat).await
    }

    /// Trend analysis across screenshots in upload order
    ///
    /// # Errors
    ///
    /// Returns validation, transport, or decode errors.
    pub async fn analyze_progress_from_images(
        &self,
        images: &[ImagePayload],
    ) -> AppResult<ProgressAnalysis> {
        requests::validate_progress_count(images.len())?;
        let chat = requests::progress(images, self.mime_policy);
        self.execute(RequestKind::Progress, chat).await
    }

    /// Feedback on one run screenshot
    ///
    /// # Errors
    ///
    /// Returns transport or decode errors.
    pub async fn analyze_recent_run_image(
        &self,
        image: &ImagePayload,
    ) -> AppResult<RecentRunAnalysis> {
        let chat = requests::recent_run(image, self.mime_policy);
        self.execute(RequestKind::RecentRun, chat).await
    }

    /// Send one request and decode its text into `T`
    async fn execute<T: DeserializeOwned>(
        &self,
        kind: RequestKind,
        chat: ChatRequest,
    ) -> AppResult<T> {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "coaching_request",
            request_id = %request_id,
            kind = %kind,
            provider = self.provider.name()
        );

        async {
            let capabilities = self.provider.capabilities();
            if chat.image_count() > 0 && !capabilities.supports_vision() {
                return Err(AppError::invalid_input(format!(
                    "{} does not accept image attachments",
                    self.provider.display_name()
                )));
            }
            if !capabilities.supports_json_mode() {
                warn!("Provider has no JSON mode; relying on the system instruction");
            }

            info!(images = chat.image_count(), "Sending coaching request");
            let started = Instant::now();
            let response = self.provider.complete(&chat).await?;
            info!(
                elapsed_ms = started.elapsed().as_millis(),
                finish_reason = ?response.finish_reason,
                "Coaching response received"
            );

            decode_response::<T>(&response.content, kind.result_kind())
        }
        .instrument(span)
        .await
        .map_err(|e| e.with_request_id(request_id.as_str()))
    }
}
