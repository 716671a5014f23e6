// ABOUTME: LLM provider abstraction for the generative model behind the coach
// ABOUTME: Defines multimodal requests, JSON-mode responses, and the provider contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Interface
//!
//! The coaching service talks to the model through [`LlmProvider`]. A request
//! is one user turn made of ordered [`MessagePart`]s (text and inline images)
//! plus an optional system instruction and an output format. The provider
//! returns the raw text of the first candidate; decoding it into typed results
//! is the caller's job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use run_coach::llm::{ChatRequest, LlmProvider, MessagePart, ResponseFormat};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![MessagePart::text("Plan my week")])
//!         .with_system_instruction("You are a running coach.")
//!         .with_response_format(ResponseFormat::Json);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    ///
    /// The coaching service checks these before sending screenshots or
    /// asking for JSON output.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider accepts inline image parts
        const VISION = 0b0000_0001;
        /// Provider can be told to emit JSON only
        const JSON_MODE = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Capabilities of a text-only provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::empty()
    }

    /// Capabilities of a multimodal JSON-capable provider (like Gemini Flash)
    #[must_use]
    pub const fn full_featured() -> Self {
        Self::VISION.union(Self::JSON_MODE)
    }

    /// Check if vision is supported
    #[must_use]
    pub const fn supports_vision(&self) -> bool {
        self.contains(Self::VISION)
    }

    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// One ordered part of the user turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePart {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
    /// Base64 image sent inline
    InlineImage {
        /// MIME type label sent with the bytes
        mime_type: String,
        /// Base64-encoded image bytes
        data: String,
    },
}

impl MessagePart {
    /// Create a text part
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an inline image part
    #[must_use]
    pub fn inline_image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineImage {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Text content, if this is a text part
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::InlineImage { .. } => None,
        }
    }

    /// Whether this is an image part
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::InlineImage { .. })
    }
}

/// Requested output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Free text
    #[default]
    Text,
    /// JSON only
    Json,
}

impl ResponseFormat {
    /// MIME type understood by the Gemini API
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }
}

/// Configuration for a single generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered parts of the user turn
    pub parts: Vec<MessagePart>,
    /// System instruction (persona and output contract)
    pub system_instruction: Option<String>,
    /// Output format
    pub response_format: ResponseFormat,
}

impl ChatRequest {
    /// Create a new request from the user turn parts
    #[must_use]
    pub const fn new(parts: Vec<MessagePart>) -> Self {
        Self {
            parts,
            system_instruction: None,
            response_format: ResponseFormat::Text,
        }
    }

    /// Set the system instruction
    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// Number of image parts
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.parts.iter().filter(|part| part.is_image()).count()
    }

    /// The text parts joined in order
    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(MessagePart::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Response from a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text of the first candidate
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (STOP, MAX_TOKENS, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for single-turn generation
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Perform one generation request
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
