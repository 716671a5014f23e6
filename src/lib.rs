// ABOUTME: Main library entry point for the Run Coach application
// ABOUTME: Exposes the screen controller, the AI contract layer, the Gemini client, and renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// deny(unsafe_code): zero-tolerance unsafe policy across the crate
#![deny(unsafe_code)]

//! # Run Coach
//!
//! Turns run screenshots or manually entered stats into AI-generated training
//! plans, recovery routines, progress analyses and recent-run feedback.
//!
//! ## Architecture
//!
//! - **Controller**: finite state machine over the screens of the flow
//! - **Coaching**: request builders, one-call-per-request service, and the
//!   fence-stripping JSON decoder
//! - **LLM**: provider trait and the Gemini implementation
//! - **Images**: screenshot intake and base64 encoding
//! - **Display**: plain-text panels for each result kind
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use run_coach::coaching::CoachingService;
//! use run_coach::config::CoachConfig;
//! use run_coach::controller::{AppController, ScreenChoice, SubmitOutcome};
//! use run_coach::errors::AppResult;
//! use run_coach::models::BodyArea;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = CoachConfig::from_env()?;
//!     let service = CoachingService::from_config(&config)?;
//!
//!     let mut controller = AppController::new();
//!     controller.select(ScreenChoice::Recovery);
//!     if let Some(form) = controller.recovery_form_mut() {
//!         form.focus_area = Some(BodyArea::Hips);
//!     }
//!     if let SubmitOutcome::Completed(kind) = controller.submit(&service).await {
//!         println!("generated a {kind}");
//!     }
//!     Ok(())
//! }
//! ```

/// Error types, result alias and error codes
pub use run_coach_core::errors;

/// Shared constants: user messages, form limits, service names
pub use run_coach_core::constants;

/// Runner inputs, AI result shapes, and the tagged coaching result
pub use run_coach_core::models;

/// AI response contract layer
pub mod coaching;

/// Environment configuration
pub mod config;

/// Screen/state controller
pub mod controller;

/// Plain-text result renderers
pub mod display;

/// Screenshot intake
pub mod images;

/// LLM provider abstraction and Gemini client
pub mod llm;

/// Structured logging setup
pub mod logging;
