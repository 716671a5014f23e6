// ABOUTME: Screen states of the coaching flow as a tagged union carrying per-screen data
// ABOUTME: Welcome menu choices and the mapping from a choice to its input screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::forms::{
    FormDraft, ImageUploadForm, ManualInputForm, ProgressForm, RecentRunForm, RecoveryForm,
};
use crate::coaching::CoachingRequest;
use crate::models::{CoachingResult, RequestKind};

/// Current screen and the data that belongs to it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    /// Start menu
    #[default]
    Welcome,
    /// Training plan from a screenshot
    ImageUpload(ImageUploadForm),
    /// Training plan from manual stats
    ManualInput(ManualInputForm),
    /// Recovery routine
    Recovery(RecoveryForm),
    /// Progress analysis
    Progress(ProgressForm),
    /// Recent-run analysis
    RecentRunUpload(RecentRunForm),
    /// Waiting on the model
    Generating(RequestKind),
    /// Showing the one current result
    PlanReady(CoachingResult),
}

impl Screen {
    /// Discriminant without the data
    #[must_use]
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Welcome => ScreenKind::Welcome,
            Self::ImageUpload(_) => ScreenKind::ImageUpload,
            Self::ManualInput(_) => ScreenKind::ManualInput,
            Self::Recovery(_) => ScreenKind::Recovery,
            Self::Progress(_) => ScreenKind::Progress,
            Self::RecentRunUpload(_) => ScreenKind::RecentRunUpload,
            Self::Generating(_) => ScreenKind::Generating,
            Self::PlanReady(_) => ScreenKind::PlanReady,
        }
    }

    /// Whether this screen carries an input form
    #[must_use]
    pub const fn is_input(&self) -> bool {
        self.kind().is_input()
    }

    fn form(&self) -> Option<&dyn FormDraft> {
        match self {
            Self::ImageUpload(form) => Some(form),
            Self::ManualInput(form) => Some(form),
            Self::Recovery(form) => Some(form),
            Self::Progress(form) => Some(form),
            Self::RecentRunUpload(form) => Some(form),
            Self::Welcome | Self::Generating(_) | Self::PlanReady(_) => None,
        }
    }

    /// Whether the current form satisfies its precondition
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form().is_some_and(FormDraft::is_ready)
    }

    /// Request the current form would submit
    #[must_use]
    pub fn pending_request(&self) -> Option<CoachingRequest> {
        self.form().and_then(FormDraft::to_request)
    }
}

/// Screen discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    /// Start menu
    Welcome,
    /// Training plan from a screenshot
    ImageUpload,
    /// Training plan from manual stats
    ManualInput,
    /// Recovery routine
    Recovery,
    /// Progress analysis
    Progress,
    /// Recent-run analysis
    RecentRunUpload,
    /// Waiting on the model
    Generating,
    /// Showing a result
    PlanReady,
}

impl ScreenKind {
    /// Whether this is one of the five input screens
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::ImageUpload
                | Self::ManualInput
                | Self::Recovery
                | Self::Progress
                | Self::RecentRunUpload
        )
    }
}

impl Display for ScreenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Welcome => "welcome",
            Self::ImageUpload => "image_upload",
            Self::ManualInput => "manual_input",
            Self::Recovery => "recovery",
            Self::Progress => "progress",
            Self::RecentRunUpload => "recent_run_upload",
            Self::Generating => "generating",
            Self::PlanReady => "plan_ready",
        })
    }
}

/// Options on the welcome menu, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenChoice {
    /// Analyze your recent run
    RecentRun,
    /// Create plan from screenshot
    PlanFromImage,
    /// Create plan manually
    PlanManually,
    /// Track your progress
    Progress,
    /// Recovery and stretching
    Recovery,
}

impl ScreenChoice {
    /// Menu order
    pub const ALL: [Self; 5] = [
        Self::RecentRun,
        Self::PlanFromImage,
        Self::PlanManually,
        Self::Progress,
        Self::Recovery,
    ];

    /// Menu title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::RecentRun => "Analyze Your Recent Run",
            Self::PlanFromImage => "Create Plan from Screenshot",
            Self::PlanManually => "Create Plan Manually",
            Self::Progress => "Track Your Progress",
            Self::Recovery => "Recovery & Stretching",
        }
    }

    /// Menu description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RecentRun => "Get instant feedback on your last session from a single screenshot.",
            Self::PlanFromImage => "Use run data for a new training plan.",
            Self::PlanManually => "Provide your stats for a training plan.",
            Self::Progress => "Analyze multiple runs to see trends.",
            Self::Recovery => "Generate a routine to aid recovery.",
        }
    }

    /// Fresh input screen for this choice
    #[must_use]
    pub fn initial_screen(&self) -> Screen {
        match self {
            Self::RecentRun => Screen::RecentRunUpload(RecentRunForm::default()),
            Self::PlanFromImage => Screen::ImageUpload(ImageUploadForm::default()),
            Self::PlanManually => Screen::ManualInput(ManualInputForm::default()),
            Self::Progress => Screen::Progress(ProgressForm::default()),
            Self::Recovery => Screen::Recovery(RecoveryForm::default()),
        }
    }
}
