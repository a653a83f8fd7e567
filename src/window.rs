//! End-to-end endpoint recognition.
//!
//! Glue between [`VideoFile`](crate::VideoFile) and
//! [`TimestampRecognizer`](crate::TimestampRecognizer): read both endpoint
//! frames, recognize each, and report what was found. The endpoints are
//! independent — one failing to decode or recognize leaves the other
//! intact.

use crate::{
    clock::ClockStamp, error::ClockSyncError, recognizer::TimestampRecognizer, video::VideoFile,
};

/// The clocks recognized at a video's two endpoints.
///
/// Either side may be `None`: the decoder could not supply that frame, or
/// the frame carried no recognizable clock. Callers typically fall back to
/// manual entry for missing sides.
#[derive(Debug, Clone)]
pub struct EndpointClocks {
    /// Clock recognized on the first decodable frame.
    pub start: Option<ClockStamp>,
    /// Clock recognized on the final frame.
    pub end: Option<ClockStamp>,
}

impl EndpointClocks {
    /// `true` when both endpoints produced a clock.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Recognize the clocks at both endpoints of a video.
///
/// At most one recognition call per endpoint; a missing frame skips
/// recognition for that side and yields `None` there. No retries.
///
/// # Errors
///
/// Returns an error only when the recognition engine itself fails
/// ([`ClockSyncError::RecognizerError`]); unreadable frames and
/// clockless frames are `None` outcomes, not errors.
///
/// # Example
///
/// ```no_run
/// use clocksync::{read_endpoint_clocks, TesseractEngine, TimestampRecognizer, VideoFile};
///
/// let mut video = VideoFile::open("input.mp4")?;
/// let recognizer = TimestampRecognizer::new(Box::new(TesseractEngine::new("tesseract")));
///
/// let clocks = read_endpoint_clocks(&mut video, &recognizer)?;
/// match (&clocks.start, &clocks.end) {
///     (Some(start), Some(end)) => println!("video runs {start} → {end}"),
///     _ => println!("clock missing on at least one endpoint"),
/// }
/// # Ok::<(), clocksync::ClockSyncError>(())
/// ```
pub fn read_endpoint_clocks(
    video: &mut VideoFile,
    recognizer: &TimestampRecognizer,
) -> Result<EndpointClocks, ClockSyncError> {
    let start = match video.first_frame() {
        Some(frame) => recognizer.recognize(&frame)?,
        None => None,
    };
    let end = match video.last_frame() {
        Some(frame) => recognizer.recognize(&frame)?,
        None => None,
    };

    Ok(EndpointClocks { start, end })
}
