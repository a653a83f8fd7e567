//! Error types for the `clocksync` crate.
//!
//! This module defines [`ClockSyncError`], the unified error type returned by
//! all fallible operations in the crate. Errors carry enough context to
//! diagnose the problem (file paths, column names, offending values) without
//! additional logging at the call site.
//!
//! "No value" outcomes — a frame with no recognizable clock, a search term
//! matching no record, an endpoint the decoder cannot supply — are *not*
//! errors. They are returned as `Option::None` by the relevant operations and
//! callers are expected to handle them gracefully.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `clocksync` operations.
///
/// Every public method that can fail returns `Result<T, ClockSyncError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClockSyncError {
    /// The video file could not be opened.
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::VideoFile::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// A video frame could not be decoded.
    #[error("Failed to decode video frame: {0}")]
    VideoDecodeError(String),

    /// The text-recognition engine could not be invoked or failed outright.
    ///
    /// A frame in which no clock was *found* is not an error — that is the
    /// `Ok(None)` outcome of [`crate::TimestampRecognizer::recognize`].
    #[error("Text recognition failed: {0}")]
    RecognizerError(String),

    /// A clock value matched the `HH:MM:SS` shape but is not a valid
    /// wall-clock time (e.g. `"99:99:99"`).
    #[error("Not a valid wall-clock time: {value}")]
    InvalidClock {
        /// The offending clock text.
        value: String,
    },

    /// The dataset file could not be opened.
    #[error("Failed to open dataset at {path}: {reason}")]
    DatasetOpen {
        /// Path that was passed to [`crate::Dataset::from_path`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// A required dataset column is missing. The whole load fails; there is
    /// no row-by-row salvage.
    #[error("Dataset is missing required column \"{column}\"")]
    MissingColumn {
        /// Name of the absent column.
        column: String,
    },

    /// A row's timestamp did not parse with the fixed `MM-DD-YYYY HH:MM`
    /// layout. Fatal for the whole dataset.
    #[error("Row {row}: could not parse \"{value}\" as a MM-DD-YYYY HH:MM timestamp")]
    TimestampParse {
        /// 1-based data row number (excluding the header).
        row: usize,
        /// The unparseable timestamp text.
        value: String,
    },

    /// The dataset rows could not be read or deserialized.
    #[error("Failed to read dataset: {0}")]
    DatasetRead(#[from] csv::Error),

    /// The chosen end time does not strictly follow the chosen start time.
    /// Reported as-is, never silently corrected by swapping.
    #[error("End time {end} must be after start time {start}")]
    EndNotAfterStart {
        /// The chosen start clock.
        start: String,
        /// The chosen end clock.
        end: String,
    },

    /// The external transcode step failed.
    #[error("Transcode failed: {0}")]
    TranscodeFailed(String),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate during frame encoding.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}

impl From<FfmpegError> for ClockSyncError {
    fn from(error: FfmpegError) -> Self {
        ClockSyncError::FfmpegError(error.to_string())
    }
}
