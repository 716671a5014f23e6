// ABOUTME: Data models exchanged between the coaching controller and display components
// ABOUTME: Runner input records, AI result shapes, and the single tagged coaching result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models.
//!
//! All records are plain and immutable once built. The AI result shapes are
//! deserialized strictly: a missing field or a wrong field type is a decode
//! error, not a silently empty panel.

mod plans;
mod result;
mod runner;

pub use plans::{
    ProgressAnalysis, ProgressInsight, ProgressTrend, RecentRunAnalysis, RecoveryPlan,
    RecoveryRoutine, RunMetricFeedback, TrainingDay, TrainingPlan, TrainingWeek,
};
pub use result::{CoachingResult, RequestKind, ResultKind};
pub use runner::{BodyArea, FitnessLevel, ManualData};
