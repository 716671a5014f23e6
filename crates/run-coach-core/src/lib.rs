// ABOUTME: Core types and constants for the Run Coach platform
// ABOUTME: Foundation crate with error handling, coaching data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Run Coach Core
//!
//! Foundation crate providing shared types and constants for Run Coach. It
//! changes infrequently so the main crate benefits from incremental builds.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: User-facing messages and form limits
//! - **models**: Runner input and AI result records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Runner input and coaching result models
pub mod models;
