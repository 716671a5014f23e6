// ABOUTME: Tests for loading screenshots from disk into request payloads
// ABOUTME: Uses temporary files to exercise format sniffing and read failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs)]

mod common;

use run_coach::constants::limits::MAX_IMAGE_BYTES;
use run_coach::errors::ErrorCode;
use run_coach::images::{ImageFormat, ImagePayload};
use tempfile::TempDir;

#[tokio::test]
async fn test_from_path_reads_and_encodes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("week1.png");
    std::fs::write(&path, common::PNG_BYTES).unwrap();

    let payload = ImagePayload::from_path(&path).await.unwrap();
    assert_eq!(payload.format, ImageFormat::Png);
    assert_eq!(payload.source_name, "week1.png");
    assert_eq!(payload.byte_len, common::PNG_BYTES.len());
    assert_eq!(payload, common::png_payload("week1.png"));
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.jpg");

    let err = ImagePayload::from_path(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.context.resource_id.unwrap().ends_with("nope.jpg"));
}

#[tokio::test]
async fn test_non_image_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"just some text").unwrap();

    let err = ImagePayload::from_path(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.context.resource_id.as_deref(), Some("notes.txt"));
}

#[tokio::test]
async fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.jpg");
    std::fs::write(&path, b"").unwrap();

    let err = ImagePayload::from_path(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_oversized_file_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("huge.jpg");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(MAX_IMAGE_BYTES as u64 + 1).unwrap();

    let err = ImagePayload::from_path(&path).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.context.resource_id.as_deref(), Some("huge.jpg"));
    assert!(err.message.contains("larger than 10 MB"));
}

#[tokio::test]
async fn test_file_at_the_limit_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.jpg");
    let mut bytes = common::JPEG_BYTES.to_vec();
    bytes.resize(MAX_IMAGE_BYTES, 0);
    std::fs::write(&path, &bytes).unwrap();

    let payload = ImagePayload::from_path(&path).await.unwrap();
    assert_eq!(payload.byte_len, MAX_IMAGE_BYTES);
}
