// ABOUTME: The single tagged coaching result and the request kinds that produce it
// ABOUTME: Replaces four nullable result slots with one variant so only one result can be current
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::{ProgressAnalysis, RecentRunAnalysis, RecoveryPlan, TrainingPlan};
use crate::constants::messages;

/// Kind of request sent to the AI coach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Training plan from a run screenshot
    TrainingFromImage,
    /// Training plan from manually entered stats
    TrainingFromManual,
    /// Recovery and stretching routine
    Recovery,
    /// Trend analysis across several screenshots
    Progress,
    /// Feedback on one run screenshot
    RecentRun,
}

impl RequestKind {
    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TrainingFromImage => "training_from_image",
            Self::TrainingFromManual => "training_from_manual",
            Self::Recovery => "recovery",
            Self::Progress => "progress",
            Self::RecentRun => "recent_run",
        }
    }

    /// Shape of the result this request produces
    #[must_use]
    pub const fn result_kind(&self) -> ResultKind {
        match self {
            Self::TrainingFromImage | Self::TrainingFromManual => ResultKind::TrainingPlan,
            Self::Recovery => ResultKind::RecoveryPlan,
            Self::Progress => ResultKind::ProgressAnalysis,
            Self::RecentRun => ResultKind::RecentRunAnalysis,
        }
    }
}

impl Display for RequestKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Shape of a decoded result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// `TrainingPlan`
    TrainingPlan,
    /// `RecoveryPlan`
    RecoveryPlan,
    /// `ProgressAnalysis`
    ProgressAnalysis,
    /// `RecentRunAnalysis`
    RecentRunAnalysis,
}

impl ResultKind {
    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TrainingPlan => "training_plan",
            Self::RecoveryPlan => "recovery_plan",
            Self::ProgressAnalysis => "progress_analysis",
            Self::RecentRunAnalysis => "recent_run_analysis",
        }
    }

    /// Banner message when the model returns `null` for this shape
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        match self {
            Self::TrainingPlan => messages::EMPTY_PLAN,
            Self::RecoveryPlan => messages::EMPTY_RECOVERY,
            Self::ProgressAnalysis | Self::RecentRunAnalysis => messages::EMPTY_ANALYSIS,
        }
    }
}

impl Display for ResultKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// The one current result of a generation cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CoachingResult {
    /// Personalized training plan
    TrainingPlan(TrainingPlan),
    /// Recovery routine
    RecoveryPlan(RecoveryPlan),
    /// Progress analysis
    ProgressAnalysis(ProgressAnalysis),
    /// Recent-run analysis
    RecentRunAnalysis(RecentRunAnalysis),
}

impl CoachingResult {
    /// Shape of this result
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::TrainingPlan(_) => ResultKind::TrainingPlan,
            Self::RecoveryPlan(_) => ResultKind::RecoveryPlan,
            Self::ProgressAnalysis(_) => ResultKind::ProgressAnalysis,
            Self::RecentRunAnalysis(_) => ResultKind::RecentRunAnalysis,
        }
    }

    /// Title of whichever result this is
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::TrainingPlan(plan) => &plan.title,
            Self::RecoveryPlan(plan) => &plan.title,
            Self::ProgressAnalysis(analysis) => &analysis.title,
            Self::RecentRunAnalysis(analysis) => &analysis.title,
        }
    }

    /// The training plan, if that is what this is
    #[must_use]
    pub const fn as_training_plan(&self) -> Option<&TrainingPlan> {
        match self {
            Self::TrainingPlan(plan) => Some(plan),
            _ => None,
        }
    }

    /// The recovery plan, if that is what this is
    #[must_use]
    pub const fn as_recovery_plan(&self) -> Option<&RecoveryPlan> {
        match self {
            Self::RecoveryPlan(plan) => Some(plan),
            _ => None,
        }
    }

    /// The progress analysis, if that is what this is
    #[must_use]
    pub const fn as_progress_analysis(&self) -> Option<&ProgressAnalysis> {
        match self {
            Self::ProgressAnalysis(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// The recent-run analysis, if that is what this is
    #[must_use]
    pub const fn as_recent_run_analysis(&self) -> Option<&RecentRunAnalysis> {
        match self {
            Self::RecentRunAnalysis(analysis) => Some(analysis),
            _ => None,
        }
    }
}

impl From<TrainingPlan> for CoachingResult {
    fn from(plan: TrainingPlan) -> Self {
        Self::TrainingPlan(plan)
    }
}

impl From<RecoveryPlan> for CoachingResult {
    fn from(plan: RecoveryPlan) -> Self {
        Self::RecoveryPlan(plan)
    }
}

impl From<ProgressAnalysis> for CoachingResult {
    fn from(analysis: ProgressAnalysis) -> Self {
        Self::ProgressAnalysis(analysis)
    }
}

impl From<RecentRunAnalysis> for CoachingResult {
    fn from(analysis: RecentRunAnalysis) -> Self {
        Self::RecentRunAnalysis(analysis)
    }
}
