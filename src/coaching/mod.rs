// ABOUTME: AI response contract layer: request builders, the coaching service, and the decoder
// ABOUTME: Each request kind pairs a system instruction and user prompt with a fixed JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coaching
//!
//! | Kind | Attachments | Result |
//! |---|---|---|
//! | training from image | 1 image, before the text | `TrainingPlan` |
//! | training from manual | none | `TrainingPlan` |
//! | recovery | none | `RecoveryPlan` |
//! | progress | 2+ images, after the text | `ProgressAnalysis` |
//! | recent run | 1 image, before the text | `RecentRunAnalysis` |
//!
//! All requests ask for JSON-only output.

pub mod decoder;
pub mod requests;
mod service;

pub use decoder::{decode_response, decode_result, strip_fences};
pub use requests::{parse_weeks_to_race, CoachingRequest};
pub use service::CoachingService;
