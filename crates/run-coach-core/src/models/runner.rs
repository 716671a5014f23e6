// ABOUTME: Runner-supplied inputs collected by the manual entry and recovery forms
// ABOUTME: ManualData, FitnessLevel, and the selectable recovery BodyArea labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Self-reported fitness level
///
/// `Unset` serializes as the empty string, matching an untouched select box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to running or runs infrequently
    Beginner,
    /// Runs a few times a week
    Intermediate,
    /// Runs regularly and races
    Advanced,
    /// Nothing selected yet
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl FitnessLevel {
    /// Selectable levels, in menu order
    pub const SELECTABLE: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire name (empty for `Unset`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Unset => "",
        }
    }

    /// Menu description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner (New to running or run infrequently)",
            Self::Intermediate => "Intermediate (Run a few times a week)",
            Self::Advanced => "Advanced (Run regularly and race)",
            Self::Unset => "Select your fitness level",
        }
    }

    /// Whether a level has been chosen
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "" => Ok(Self::Unset),
            other => Err(AppError::invalid_input(format!(
                "unknown fitness level '{other}' (expected beginner, intermediate or advanced)"
            ))),
        }
    }
}

impl Display for FitnessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Runner stats entered by hand
///
/// Numbers are kept as the text the runner typed; the record is interpolated
/// into the prompt as JSON and never interpreted locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualData {
    /// Age in years
    pub age: String,
    /// Height in cm
    pub height: String,
    /// Weight in kg
    pub weight: String,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// Recent race or best effort, e.g. "10k in 55 minutes"
    pub recent_run: String,
}

impl ManualData {
    /// Names of the fields that are still empty
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.age.trim().is_empty() {
            missing.push("age");
        }
        if self.height.trim().is_empty() {
            missing.push("height");
        }
        if self.weight.trim().is_empty() {
            missing.push("weight");
        }
        if !self.fitness_level.is_set() {
            missing.push("fitnessLevel");
        }
        if self.recent_run.trim().is_empty() {
            missing.push("recentRun");
        }
        missing
    }

    /// Whether every field has a value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Body area a recovery routine focuses on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BodyArea {
    /// Neck
    Neck,
    /// Both arms
    Arms,
    /// Chest, shoulders and upper back
    UpperBody,
    /// Abdominals and lower back
    Core,
    /// Hips and glutes
    Hips,
    /// Quads and hamstrings
    UpperLegs,
    /// Calves, shins and ankles
    LowerLegs,
    /// Any other label the runner typed
    Other(String),
}

impl BodyArea {
    /// Areas offered by the anatomy selector, head to toe
    pub const SELECTABLE: [Self; 7] = [
        Self::Neck,
        Self::Arms,
        Self::UpperBody,
        Self::Core,
        Self::Hips,
        Self::UpperLegs,
        Self::LowerLegs,
    ];

    /// Label sent in the prompt
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Neck => "Neck",
            Self::Arms => "Arms",
            Self::UpperBody => "Upper Body",
            Self::Core => "Core",
            Self::Hips => "Hips",
            Self::UpperLegs => "Upper Legs",
            Self::LowerLegs => "Lower Legs",
            Self::Other(label) => label,
        }
    }

    /// Match a label against the known areas, falling back to `Other`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        Self::SELECTABLE
            .iter()
            .find(|area| area.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Self::Other(trimmed.to_owned()))
    }

    /// Whether the label is usable (non-empty)
    #[must_use]
    pub fn is_selected(&self) -> bool {
        !self.label().trim().is_empty()
    }
}

impl Display for BodyArea {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}
