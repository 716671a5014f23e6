// ABOUTME: Screen/state controller driving the coaching flow from menu to result
// ABOUTME: Dispatches one request per submission and routes the single result to its display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Controller
//!
//! A finite state machine over [`Screen`]. The machine starts at `Welcome`
//! and can be restarted any number of times.
//!
//! ```text
//! Welcome --select--> input screen --submit--> Generating --ok--> PlanReady
//!    ^                     |                        |                 |
//!    +------back-----------+                        +--error--> Welcome
//!    +------------------------------back / reset----------------------+
//! ```
//!
//! `submit` holds `&mut self` across the model call, so a second submission
//! cannot start while one is outstanding.

mod forms;
mod screen;

pub use forms::{
    FormDraft, ImageUploadForm, ManualInputForm, ProgressForm, RecentRunForm, RecoveryForm,
};
pub use screen::{Screen, ScreenChoice, ScreenKind};

use tracing::{debug, error, info, instrument};

use crate::coaching::{CoachingRequest, CoachingService};
use crate::errors::AppResult;
use crate::models::{CoachingResult, RequestKind, ResultKind};

/// What a call to `submit` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not on an input screen, or the form is incomplete; nothing changed
    Inert,
    /// A result of this kind is now shown
    Completed(ResultKind),
    /// Generation failed; the banner carries this message
    Failed(String),
}

impl SubmitOutcome {
    /// Whether a request was sent
    #[must_use]
    pub const fn was_dispatched(&self) -> bool {
        !matches!(self, Self::Inert)
    }
}

/// Controller state: the current screen and the error banner
#[derive(Debug, Clone, Default)]
pub struct AppController {
    screen: Screen,
    error: Option<String>,
}

impl AppController {
    /// Start at `Welcome` with no error
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current screen
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Current screen for editing form drafts
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Current error banner, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The one current result, present only on `PlanReady`
    #[must_use]
    pub const fn result(&self) -> Option<&CoachingResult> {
        match &self.screen {
            Screen::PlanReady(result) => Some(result),
            _ => None,
        }
    }

    /// Move from `Welcome` to the chosen input screen with an empty form
    ///
    /// Returns `false` (and does nothing) from any other screen.
    pub fn select(&mut self, choice: ScreenChoice) -> bool {
        if !matches!(self.screen, Screen::Welcome) {
            debug!(screen = %self.screen.kind(), ?choice, "select ignored outside welcome");
            return false;
        }
        self.screen = choice.initial_screen();
        debug!(screen = %self.screen.kind(), "screen selected");
        true
    }

    /// Whether the current input form satisfies its precondition
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.screen.can_submit()
    }

    /// Move to `Generating` and hand back the request to send
    ///
    /// Clears the error banner. Returns `None` and changes nothing when the
    /// precondition is unmet or the screen is not an input screen.
    pub fn start_generation(&mut self) -> Option<CoachingRequest> {
        let request = self.screen.pending_request()?;
        self.error = None;
        self.screen = Screen::Generating(request.kind());
        info!(kind = %request.kind(), "generation started");
        Some(request)
    }

    /// Apply the outcome of the request started by [`start_generation`]
    ///
    /// Inert unless the screen is `Generating`.
    ///
    /// [`start_generation`]: AppController::start_generation
    pub fn finish_generation(&mut self, outcome: AppResult<CoachingResult>) -> SubmitOutcome {
        let Screen::Generating(kind) = self.screen else {
            debug!(screen = %self.screen.kind(), "finish ignored outside generating");
            return SubmitOutcome::Inert;
        };

        match outcome {
            Ok(result) => {
                let result_kind = result.kind();
                info!(%kind, %result_kind, "generation completed");
                self.screen = Screen::PlanReady(result);
                SubmitOutcome::Completed(result_kind)
            }
            Err(e) => {
                error!(
                    %kind,
                    code = ?e.code,
                    request_id = ?e.context.request_id,
                    details = %e.context.details,
                    "generation failed: {e}"
                );
                let message = e.user_message();
                self.error = Some(message.clone());
                self.screen = Screen::Welcome;
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Submit the current form and wait for the result
    #[instrument(skip_all, fields(screen = %self.screen.kind()))]
    pub async fn submit(&mut self, service: &CoachingService) -> SubmitOutcome {
        let Some(request) = self.start_generation() else {
            debug!("submit is inert");
            return SubmitOutcome::Inert;
        };
        let outcome = service.generate(&request).await;
        self.finish_generation(outcome)
    }

    /// Go back one step
    ///
    /// From `PlanReady` this is a full reset. From an input screen it returns
    /// to `Welcome` and keeps the banner. From `Welcome` or `Generating` it
    /// does nothing.
    pub fn back(&mut self) {
        match self.screen.kind() {
            ScreenKind::PlanReady => self.reset(),
            kind if kind.is_input() => self.screen = Screen::Welcome,
            _ => debug!(screen = %self.screen.kind(), "back ignored"),
        }
    }

    /// Clear the error banner
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Return to `Welcome`, dropping any result and error
    pub fn reset(&mut self) {
        self.screen = Screen::Welcome;
        self.error = None;
    }

    /// Request kind being generated, if any
    #[must_use]
    pub const fn generating(&self) -> Option<RequestKind> {
        match self.screen {
            Screen::Generating(kind) => Some(kind),
            _ => None,
        }
    }

    /// Image-upload draft, when on that screen
    pub fn image_form_mut(&mut self) -> Option<&mut ImageUploadForm> {
        match &mut self.screen {
            Screen::ImageUpload(form) => Some(form),
            _ => None,
        }
    }

    /// Manual-input draft, when on that screen
    pub fn manual_form_mut(&mut self) -> Option<&mut ManualInputForm> {
        match &mut self.screen {
            Screen::ManualInput(form) => Some(form),
            _ => None,
        }
    }

    /// Recovery draft, when on that screen
    pub fn recovery_form_mut(&mut self) -> Option<&mut RecoveryForm> {
        match &mut self.screen {
            Screen::Recovery(form) => Some(form),
            _ => None,
        }
    }

    /// Progress draft, when on that screen
    pub fn progress_form_mut(&mut self) -> Option<&mut ProgressForm> {
        match &mut self.screen {
            Screen::Progress(form) => Some(form),
            _ => None,
        }
    }

    /// Recent-run draft, when on that screen
    pub fn recent_run_form_mut(&mut self) -> Option<&mut RecentRunForm> {
        match &mut self.screen {
            Screen::RecentRunUpload(form) => Some(form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::{RecoveryPlan, RecoveryRoutine};

    fn recovery_plan() -> CoachingResult {
        RecoveryPlan {
            title: "Hip Reset".into(),
            overview: "Loosen the hips".into(),
            routines: vec![RecoveryRoutine {
                name: "Pigeon".into(),
                description: "Hold".into(),
                duration: "2x30s".into(),
            }],
        }
        .into()
    }

    #[test]
    fn test_select_only_from_welcome() {
        let mut controller = AppController::new();
        assert!(controller.select(ScreenChoice::Recovery));
        assert_eq!(controller.screen().kind(), ScreenKind::Recovery);
        assert!(!controller.select(ScreenChoice::Progress));
        assert_eq!(controller.screen().kind(), ScreenKind::Recovery);
    }

    #[test]
    fn test_start_generation_inert_when_incomplete() {
        let mut controller = AppController::new();
        controller.select(ScreenChoice::Recovery);
        assert!(controller.start_generation().is_none());
        assert_eq!(controller.screen().kind(), ScreenKind::Recovery);
    }

    #[test]
    fn test_generation_lifecycle_success() {
        let mut controller = AppController::new();
        controller.select(ScreenChoice::Recovery);
        controller.recovery_form_mut().unwrap().focus_area =
            Some(crate::models::BodyArea::Hips);
        let request = controller.start_generation().unwrap();
        assert_eq!(request.kind(), RequestKind::Recovery);
        assert_eq!(controller.generating(), Some(RequestKind::Recovery));

        let outcome = controller.finish_generation(Ok(recovery_plan()));
        assert_eq!(outcome, SubmitOutcome::Completed(ResultKind::RecoveryPlan));
        assert_eq!(controller.result().unwrap().title(), "Hip Reset");

        controller.back();
        assert_eq!(controller.screen().kind(), ScreenKind::Welcome);
        assert!(controller.result().is_none());
    }

    #[test]
    fn test_failure_returns_to_welcome_with_generic_banner() {
        let mut controller = AppController::new();
        controller.select(ScreenChoice::Recovery);
        controller.recovery_form_mut().unwrap().focus_area =
            Some(crate::models::BodyArea::Core);
        controller.start_generation().unwrap();

        let outcome =
            controller.finish_generation(Err(AppError::external_unavailable("Gemini", "down")));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed("An unknown error occurred. Please try again.".into())
        );
        assert_eq!(controller.screen().kind(), ScreenKind::Welcome);
        assert!(controller.result().is_none());
    }

    #[test]
    fn test_back_from_input_keeps_error() {
        let mut controller = AppController::new();
        controller.error = Some("boom".into());
        controller.select(ScreenChoice::PlanManually);
        controller.back();
        assert_eq!(controller.screen().kind(), ScreenKind::Welcome);
        assert_eq!(controller.error(), Some("boom"));
        controller.dismiss_error();
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_finish_outside_generating_is_inert() {
        let mut controller = AppController::new();
        assert_eq!(
            controller.finish_generation(Ok(recovery_plan())),
            SubmitOutcome::Inert
        );
        assert!(controller.result().is_none());
    }
}
