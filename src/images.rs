// ABOUTME: Screenshot intake: reads image files, sniffs their format, and base64-encodes them
// ABOUTME: Enforces the upload size limit and decides which MIME type is declared to the model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ImageMimePolicy;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const RIFF_MAGIC: &[u8] = b"RIFF";
const WEBP_MAGIC: &[u8] = b"WEBP";

/// Image formats accepted by the upload screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG
    Png,
    /// JPEG
    Jpeg,
    /// WEBP
    Webp,
}

impl ImageFormat {
    /// Sniff the format from the leading bytes
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_MAGIC) {
            Some(Self::Png)
        } else if bytes.starts_with(JPEG_MAGIC) {
            Some(Self::Jpeg)
        } else if bytes.len() >= 12 && bytes.starts_with(RIFF_MAGIC) && &bytes[8..12] == WEBP_MAGIC
        {
            Some(Self::Webp)
        } else {
            None
        }
    }

    /// MIME type of the format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Webp => "WEBP",
        })
    }
}

/// A decoded screenshot ready to attach to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Base64 of the raw file bytes
    pub data: String,
    /// Format sniffed from the bytes
    pub format: ImageFormat,
    /// File name the image came from
    pub source_name: String,
    /// Size of the raw bytes
    pub byte_len: usize,
}

impl ImagePayload {
    /// Build a payload from in-memory bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty data, data over the upload limit, or
    /// a format other than PNG, JPEG or WEBP.
    pub fn from_bytes(bytes: &[u8], source_name: impl Into<String>) -> AppResult<Self> {
        let source_name = source_name.into();

        if bytes.is_empty() {
            return Err(
                AppError::invalid_input(format!("{source_name} is empty"))
                    .with_resource_id(source_name),
            );
        }
        if bytes.len() > limits::MAX_IMAGE_BYTES {
            return Err(too_large(source_name));
        }
        let format = ImageFormat::detect(bytes).ok_or_else(|| {
            AppError::invalid_input(format!(
                "{source_name} is not a PNG, JPEG or WEBP image"
            ))
            .with_resource_id(source_name.clone())
        })?;

        debug!(source = %source_name, %format, bytes = bytes.len(), "Encoded image payload");

        Ok(Self {
            data: STANDARD.encode(bytes),
            format,
            source_name,
            byte_len: bytes.len(),
        })
    }

    /// Read and encode an image file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, otherwise the same
    /// errors as [`ImagePayload::from_bytes`].
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let read_error = |e: std::io::Error| {
            AppError::storage(format!("Failed to read {display}: {e}"))
                .with_resource_id(display.clone())
                .with_source(e)
        };
        let name = path
            .file_name()
            .map_or_else(|| display.clone(), |n| n.to_string_lossy().into_owned());

        let size = tokio::fs::metadata(path).await.map_err(read_error)?.len();
        if size > limits::MAX_IMAGE_BYTES as u64 {
            return Err(too_large(name));
        }

        let bytes = tokio::fs::read(path).await.map_err(read_error)?;
        Self::from_bytes(&bytes, name)
    }

    /// MIME type declared to the model under the given policy
    #[must_use]
    pub const fn declared_mime(&self, policy: ImageMimePolicy) -> &'static str {
        match policy {
            ImageMimePolicy::AlwaysJpeg => ImageFormat::Jpeg.mime_type(),
            ImageMimePolicy::Detected => self.format.mime_type(),
        }
    }
}

fn too_large(source_name: String) -> AppError {
    AppError::invalid_input(format!(
        "{source_name} is larger than {} MB",
        limits::MAX_IMAGE_BYTES / (1024 * 1024)
    ))
    .with_resource_id(source_name)
}
