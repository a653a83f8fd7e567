//! Playback window computation.
//!
//! Reconciles the clock recognized on the video's first frame with a chosen
//! (or record-derived) start and end clock, producing offsets in seconds
//! from the start of the video.
//!
//! All three clocks are interpreted on the same arbitrary reference day —
//! only hour/minute/second matter, which makes subtraction well-defined.
//! A recording that spans midnight therefore produces a *negative* offset
//! for any chosen clock numerically smaller than the video-start clock;
//! that value is surfaced unchanged rather than wrapped, and only the
//! chosen-start-versus-chosen-end ordering is validated.

use crate::{clock::ClockStamp, error::ClockSyncError};

/// A relative playback window, in seconds from the start of the video.
///
/// Produced by [`compute_window`], which enforces
/// `start_offset < end_offset` on the chosen wall-clock times before the
/// window exists — an ordering violation is an error, never a partial
/// window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct TimeWindow {
    /// Seconds from video start to the chosen start time.
    pub start_offset: f64,
    /// Seconds from video start to the chosen end time.
    pub end_offset: f64,
}

/// Compute the playback window for a chosen time range.
///
/// `video_start` is the clock recognized on the video's first frame;
/// `chosen_start` and `chosen_end` are the user's (or a resolved record's)
/// wall-clock choices. Offsets are signed: a chosen clock earlier than the
/// video-start clock yields a negative offset, which is passed through
/// as-is.
///
/// # Errors
///
/// - [`ClockSyncError::EndNotAfterStart`] when `chosen_start >= chosen_end`,
///   compared on wall-clock time independent of the video-start reference.
///   The values are never swapped on the caller's behalf.
/// - [`ClockSyncError::InvalidClock`] when any input's digit groups are out
///   of wall-clock range.
///
/// # Example
///
/// ```
/// use clocksync::{compute_window, ClockStamp};
///
/// let video_start: ClockStamp = "09:00:00".parse()?;
/// let start: ClockStamp = "09:05:00".parse()?;
/// let end: ClockStamp = "09:10:00".parse()?;
///
/// let window = compute_window(&video_start, &start, &end)?;
/// assert_eq!(window.start_offset, 300.0);
/// assert_eq!(window.end_offset, 600.0);
/// # Ok::<(), clocksync::ClockSyncError>(())
/// ```
pub fn compute_window(
    video_start: &ClockStamp,
    chosen_start: &ClockStamp,
    chosen_end: &ClockStamp,
) -> Result<TimeWindow, ClockSyncError> {
    let reference = video_start.as_naive_time()?;
    let start = chosen_start.as_naive_time()?;
    let end = chosen_end.as_naive_time()?;

    let start_offset = start.signed_duration_since(reference).num_seconds() as f64;
    let end_offset = end.signed_duration_since(reference).num_seconds() as f64;

    if start >= end {
        return Err(ClockSyncError::EndNotAfterStart {
            start: chosen_start.to_string(),
            end: chosen_end.to_string(),
        });
    }

    log::debug!(
        "Window for start={chosen_start} end={chosen_end} against video start {video_start}: \
         [{start_offset}s, {end_offset}s]"
    );

    Ok(TimeWindow {
        start_offset,
        end_offset,
    })
}
