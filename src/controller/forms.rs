// ABOUTME: Form drafts carried by the input screens and their submission preconditions
// ABOUTME: Each draft knows whether it is ready and how to become a CoachingRequest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coaching::requests::{parse_weeks_to_race, validate_progress_count};
use crate::coaching::CoachingRequest;
use crate::images::ImagePayload;
use crate::models::{BodyArea, ManualData};

/// Common behaviour of input screen drafts
pub trait FormDraft {
    /// Whether the submit button would be enabled
    fn is_ready(&self) -> bool;

    /// Collected request, or `None` while the precondition is unmet
    fn to_request(&self) -> Option<CoachingRequest>;
}

fn goal_is_set(goal: &str) -> bool {
    !goal.trim().is_empty()
}

/// Screenshot plus goal and week count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUploadForm {
    /// Decoded screenshot
    pub image: Option<ImagePayload>,
    /// Next running goal
    pub goal: String,
    /// Weeks to race, as typed
    pub weeks_to_race: String,
}

impl FormDraft for ImageUploadForm {
    fn is_ready(&self) -> bool {
        self.image.is_some()
            && goal_is_set(&self.goal)
            && parse_weeks_to_race(&self.weeks_to_race).is_some()
    }

    fn to_request(&self) -> Option<CoachingRequest> {
        if !goal_is_set(&self.goal) {
            return None;
        }
        Some(CoachingRequest::TrainingFromImage {
            image: self.image.clone()?,
            goal: self.goal.trim().to_owned(),
            weeks_to_race: parse_weeks_to_race(&self.weeks_to_race)?,
        })
    }
}

/// Manual runner stats plus goal and week count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualInputForm {
    /// Runner stats
    pub data: ManualData,
    /// Race goal
    pub goal: String,
    /// Weeks to race, as typed
    pub weeks_to_race: String,
}

impl FormDraft for ManualInputForm {
    fn is_ready(&self) -> bool {
        self.data.is_complete()
            && goal_is_set(&self.goal)
            && parse_weeks_to_race(&self.weeks_to_race).is_some()
    }

    fn to_request(&self) -> Option<CoachingRequest> {
        if !self.is_ready() {
            return None;
        }
        Some(CoachingRequest::TrainingFromManual {
            data: self.data.clone(),
            goal: self.goal.trim().to_owned(),
            weeks_to_race: parse_weeks_to_race(&self.weeks_to_race)?,
        })
    }
}

/// Selected body area with an optional muscle detail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryForm {
    /// Area picked in the anatomy selector
    pub focus_area: Option<BodyArea>,
    /// Optional muscle detail
    pub specific_muscle: String,
}

impl FormDraft for RecoveryForm {
    fn is_ready(&self) -> bool {
        self.focus_area.as_ref().is_some_and(BodyArea::is_selected)
    }

    fn to_request(&self) -> Option<CoachingRequest> {
        let focus_area = self.focus_area.clone().filter(BodyArea::is_selected)?;
        Some(CoachingRequest::Recovery {
            focus_area,
            specific_muscle: self.specific_muscle.trim().to_owned(),
        })
    }
}

/// Screenshots for progress analysis, in upload order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressForm {
    /// Uploaded screenshots, oldest first
    pub images: Vec<ImagePayload>,
}

impl ProgressForm {
    /// Append a screenshot
    pub fn add_image(&mut self, image: ImagePayload) {
        self.images.push(image);
    }

    /// Remove the screenshot at `index`, if present
    pub fn remove_image(&mut self, index: usize) -> Option<ImagePayload> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }
}

impl FormDraft for ProgressForm {
    fn is_ready(&self) -> bool {
        validate_progress_count(self.images.len()).is_ok()
    }

    fn to_request(&self) -> Option<CoachingRequest> {
        self.is_ready().then(|| CoachingRequest::Progress {
            images: self.images.clone(),
        })
    }
}

/// Single screenshot of a recent run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentRunForm {
    /// Decoded screenshot
    pub image: Option<ImagePayload>,
}

impl FormDraft for RecentRunForm {
    fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    fn to_request(&self) -> Option<CoachingRequest> {
        Some(CoachingRequest::RecentRun {
            image: self.image.clone()?,
        })
    }
}
