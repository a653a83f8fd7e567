//! Video metadata types.
//!
//! Metadata is extracted once when a [`VideoFile`](crate::VideoFile) is
//! opened and cached for its lifetime; reading it requires no additional
//! decoding.

use std::time::Duration;

/// Metadata for the video stream of an opened file.
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Average frames per second. May be zero when the container does not
    /// report a frame rate.
    pub frames_per_second: f64,
    /// Estimated total frame count, derived from duration × frame rate.
    pub frame_count: u64,
    /// Video codec name (e.g. `"h264"`).
    pub codec: String,
    /// Total duration of the media file.
    pub duration: Duration,
    /// Container format name (e.g. `"mp4"`, `"matroska"`).
    pub format: String,
}
