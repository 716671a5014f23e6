// ABOUTME: Configuration management module for Run Coach settings
// ABOUTME: Environment-only configuration for the AI credential, model and transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Run Coach
//!
//! - **Environment**: `CoachConfig` loaded from environment variables
//! - **Types**: the strongly typed `ImageMimePolicy`
//!
//! Log level, format and deployment environment are read by
//! [`crate::logging::LoggingConfig`].

/// Environment configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::{CoachConfig, GeminiConfig};
pub use types::ImageMimePolicy;
