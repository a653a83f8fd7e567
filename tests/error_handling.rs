//! Error handling integration tests.
//!
//! These tests verify that meaningful, typed errors are returned for the
//! various failure conditions.

use clocksync::{
    ClockSyncError, FfmpegTranscoder, TesseractEngine, TimestampRecognizer, Transcoder, VideoFile,
};
use image::DynamicImage;
use std::path::Path;

#[test]
fn open_nonexistent_video() {
    let result = VideoFile::open("this_file_does_not_exist.mp4");
    assert!(result.is_err());

    let error_message = result.unwrap_err().to_string();
    assert!(
        error_message.contains("Failed to open media file"),
        "Error message should mention file open failure: {error_message}",
    );
}

#[test]
fn open_invalid_video() {
    // Create a temporary file with garbage content.
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid_file_path = temporary_directory.path().join("invalid.mp4");
    std::fs::write(&invalid_file_path, b"this is not a media file")
        .expect("Failed to write invalid file");

    let result = VideoFile::open(&invalid_file_path);
    assert!(result.is_err(), "Expected error for invalid media file");
}

#[test]
fn missing_recognizer_executable() {
    let engine = TesseractEngine::new("/nonexistent/path/to/tesseract");
    let recognizer = TimestampRecognizer::new(Box::new(engine));

    let error = recognizer
        .recognize(&DynamicImage::new_rgb8(32, 32))
        .unwrap_err();
    assert!(
        matches!(&error, ClockSyncError::RecognizerError(reason) if reason.contains("launch")),
        "expected RecognizerError, got: {error}",
    );
}

#[test]
fn missing_transcoder_executable() {
    let transcoder = FfmpegTranscoder::new("/nonexistent/path/to/ffmpeg");
    let error = transcoder
        .transcode(Path::new("in.avi"), Path::new("out.mp4"))
        .unwrap_err();
    assert!(
        matches!(error, ClockSyncError::TranscodeFailed(_)),
        "expected TranscodeFailed",
    );
}

#[test]
fn error_messages_are_descriptive() {
    let missing_column = ClockSyncError::MissingColumn {
        column: "Phone".to_string(),
    };
    assert!(missing_column.to_string().contains("required column"));

    let ordering = ClockSyncError::EndNotAfterStart {
        start: "09:10:00".to_string(),
        end: "09:05:00".to_string(),
    };
    let message = ordering.to_string();
    assert!(message.contains("09:10:00") && message.contains("09:05:00"));

    let invalid = ClockSyncError::InvalidClock {
        value: "99:99:99".to_string(),
    };
    assert!(invalid.to_string().contains("99:99:99"));
}
