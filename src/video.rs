//! Video endpoint reading.
//!
//! [`VideoFile`] opens a media file with FFmpeg and supplies the two frames
//! the clock pipeline cares about: the first successfully decoded frame and
//! the frame at the final index. Both are returned as
//! [`image::DynamicImage`] values in RGB8.
//!
//! Endpoint reads deliberately return `Option` rather than `Result`: a video
//! whose endpoint cannot be decoded simply has no clock to offer for that
//! endpoint, and the caller falls back to manual entry. Decode failures are
//! logged at warn level and surface as `None` — there is no internal retry
//! and no fallback to a neighboring frame.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{
    Rational,
    codec::context::Context as CodecContext,
    format::{Pixel, context::Input},
    frame::Video as VideoFrame,
    media::Type,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{error::ClockSyncError, metadata::VideoMetadata};

/// An opened video file positioned for endpoint reads.
///
/// Created via [`VideoFile::open`]; holds the demuxer context and cached
/// [`VideoMetadata`]. Each endpoint read builds a fresh decoder, seeks, and
/// decodes forward, so reads are independent of one another.
///
/// # Example
///
/// ```no_run
/// use clocksync::VideoFile;
///
/// let mut video = VideoFile::open("input.mp4")?;
/// println!("{}x{}", video.metadata().width, video.metadata().height);
/// if let Some(frame) = video.first_frame() {
///     frame.save("start.png").unwrap();
/// }
/// # Ok::<(), clocksync::ClockSyncError>(())
/// ```
pub struct VideoFile {
    /// The opened FFmpeg input (demuxer) context.
    input_context: Input,
    /// Cached metadata extracted at open time.
    metadata: VideoMetadata,
    /// Index of the best video stream.
    video_stream_index: usize,
    /// Path to the opened file (kept for error messages).
    #[allow(dead_code)]
    file_path: PathBuf,
}

impl Debug for VideoFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VideoFile")
            .field("metadata", &self.metadata)
            .field("video_stream_index", &self.video_stream_index)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl VideoFile {
    /// Open a video file for endpoint reads.
    ///
    /// Initializes FFmpeg (idempotent), opens the file, locates the best
    /// video stream, and caches its metadata.
    ///
    /// # Errors
    ///
    /// - [`ClockSyncError::FileOpen`] if the file cannot be opened.
    /// - [`ClockSyncError::NoVideoStream`] if the file has no video stream.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ClockSyncError> {
        let path = path.as_ref();
        let file_path = path.to_path_buf();

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| ClockSyncError::FileOpen {
            path: file_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| ClockSyncError::FileOpen {
                path: file_path.clone(),
                reason: error.to_string(),
            })?;

        let video_stream_index = input_context
            .streams()
            .best(Type::Video)
            .map(|stream| stream.index())
            .ok_or(ClockSyncError::NoVideoStream)?;

        let duration_microseconds = input_context.duration();
        let duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64)
        } else {
            Duration::ZERO
        };

        let format = input_context.format().name().to_string();

        let stream = input_context
            .stream(video_stream_index)
            .ok_or(ClockSyncError::NoVideoStream)?;
        let decoder_context =
            CodecContext::from_parameters(stream.parameters()).map_err(|error| {
                ClockSyncError::FileOpen {
                    path: file_path.clone(),
                    reason: format!("Failed to read video codec parameters: {error}"),
                }
            })?;
        let video_decoder =
            decoder_context
                .decoder()
                .video()
                .map_err(|error| ClockSyncError::FileOpen {
                    path: file_path.clone(),
                    reason: format!("Failed to create video decoder: {error}"),
                })?;

        let width = video_decoder.width();
        let height = video_decoder.height();

        // Average frame rate, falling back to the raw rate field.
        let frame_rate = stream.avg_frame_rate();
        let frames_per_second = if frame_rate.denominator() != 0 {
            frame_rate.numerator() as f64 / frame_rate.denominator() as f64
        } else {
            let rate = stream.rate();
            if rate.denominator() != 0 {
                rate.numerator() as f64 / rate.denominator() as f64
            } else {
                0.0
            }
        };

        let frame_count = if frames_per_second > 0.0 {
            (duration.as_secs_f64() * frames_per_second) as u64
        } else {
            0
        };

        let codec = video_decoder
            .codec()
            .map(|codec| codec.name().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let metadata = VideoMetadata {
            width,
            height,
            frames_per_second,
            frame_count,
            codec,
            duration,
            format,
        };

        log::debug!(
            "Opened {:?}: {}x{} @ {:.2} fps, ~{} frames",
            file_path,
            width,
            height,
            frames_per_second,
            frame_count
        );

        Ok(Self {
            input_context,
            metadata,
            video_stream_index,
            file_path,
        })
    }

    /// Get a reference to the cached video metadata.
    pub fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    /// The first successfully decoded frame, or `None` if the video has no
    /// decodable frames.
    pub fn first_frame(&mut self) -> Option<DynamicImage> {
        match self.decode_frame_at(0) {
            Ok(frame) => Some(frame),
            Err(error) => {
                log::warn!("Could not decode first frame: {error}");
                None
            }
        }
    }

    /// The frame at the final frame index (frame count − 1).
    ///
    /// If seeking to that index fails to produce a decoded frame, this
    /// returns `None` rather than falling back to an earlier frame.
    pub fn last_frame(&mut self) -> Option<DynamicImage> {
        let frame_count = self.metadata.frame_count;
        if frame_count == 0 {
            log::warn!("Video reports zero frames; no last frame to decode");
            return None;
        }
        match self.decode_frame_at(frame_count - 1) {
            Ok(frame) => Some(frame),
            Err(error) => {
                log::warn!("Could not decode last frame: {error}");
                None
            }
        }
    }

    /// Decode the frame at `frame_number` (0-indexed).
    ///
    /// Seeks to the nearest keyframe before the target and decodes forward
    /// until the target index is reached.
    fn decode_frame_at(&mut self, frame_number: u64) -> Result<DynamicImage, ClockSyncError> {
        let video_stream_index = self.video_stream_index;
        let frames_per_second = self.metadata.frames_per_second;
        let target_width = self.metadata.width;
        let target_height = self.metadata.height;

        // Build a fresh decoder from the stream parameters.
        let stream = self
            .input_context
            .stream(video_stream_index)
            .ok_or(ClockSyncError::NoVideoStream)?;
        let time_base = stream.time_base();
        let decoder_context = CodecContext::from_parameters(stream.parameters())?;
        let mut decoder = decoder_context.decoder().video()?;

        // Pixel-format converter (source format → RGB24).
        let mut scaler = ScalingContext::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            Pixel::RGB24,
            target_width,
            target_height,
            ScalingFlags::BILINEAR,
        )?;

        let target_timestamp =
            frame_number_to_stream_timestamp(frame_number, frames_per_second, time_base);
        self.input_context.seek(target_timestamp, ..target_timestamp)?;

        let mut decoded_frame = VideoFrame::empty();
        let mut rgb_frame = VideoFrame::empty();

        for (stream, packet) in self.input_context.packets() {
            if stream.index() != video_stream_index {
                continue;
            }

            decoder.send_packet(&packet)?;

            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                let pts = decoded_frame.pts().unwrap_or(0);
                let current = pts_to_frame_number(pts, time_base, frames_per_second);

                if current >= frame_number {
                    scaler.run(&decoded_frame, &mut rgb_frame)?;
                    return frame_to_image(&rgb_frame, target_width, target_height);
                }
            }
        }

        // Flush the decoder.
        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            let pts = decoded_frame.pts().unwrap_or(0);
            let current = pts_to_frame_number(pts, time_base, frames_per_second);

            if current >= frame_number {
                scaler.run(&decoded_frame, &mut rgb_frame)?;
                return frame_to_image(&rgb_frame, target_width, target_height);
            }
        }

        Err(ClockSyncError::VideoDecodeError(format!(
            "Could not locate frame {frame_number} in the video stream"
        )))
    }
}

/// Convert a [`Duration`] to a timestamp in the stream's time base.
fn duration_to_stream_timestamp(duration: Duration, time_base: Rational) -> i64 {
    let seconds = duration.as_secs_f64();
    let numerator = time_base.numerator() as f64;
    let denominator = time_base.denominator() as f64;
    (seconds * denominator / numerator) as i64
}

/// Convert a frame number to a timestamp in the stream's time base.
fn frame_number_to_stream_timestamp(
    frame_number: u64,
    frames_per_second: f64,
    time_base: Rational,
) -> i64 {
    if frames_per_second <= 0.0 {
        return 0;
    }
    let seconds = frame_number as f64 / frames_per_second;
    duration_to_stream_timestamp(Duration::from_secs_f64(seconds), time_base)
}

/// Rescale a PTS value to a frame number.
fn pts_to_frame_number(pts: i64, time_base: Rational, frames_per_second: f64) -> u64 {
    let seconds = pts as f64 * time_base.numerator() as f64 / time_base.denominator() as f64;
    (seconds * frames_per_second) as u64
}

/// Convert a scaled RGB24 video frame to an [`image::DynamicImage`].
///
/// FFmpeg frames frequently carry per-row padding (stride > width × 3); the
/// padding is stripped before the buffer is handed to the `image` crate.
fn frame_to_image(
    rgb_frame: &VideoFrame,
    width: u32,
    height: u32,
) -> Result<DynamicImage, ClockSyncError> {
    let stride = rgb_frame.stride(0);
    let expected_stride = (width as usize) * 3;
    let data = rgb_frame.data(0);

    let buffer = if stride == expected_stride {
        data[..expected_stride * (height as usize)].to_vec()
    } else {
        let mut buffer = Vec::with_capacity(expected_stride * (height as usize));
        for row in 0..(height as usize) {
            let row_start = row * stride;
            buffer.extend_from_slice(&data[row_start..row_start + expected_stride]);
        }
        buffer
    };

    let rgb_image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        ClockSyncError::VideoDecodeError(
            "Failed to construct RGB image from decoded frame data".to_string(),
        )
    })?;
    Ok(DynamicImage::ImageRgb8(rgb_image))
}
