//! Container transcoding.
//!
//! Uploads arrive in whatever container the recorder produced; hosts that
//! need H.264 for playback re-encode first. That step is modeled as the
//! [`Transcoder`] capability so the rest of the pipeline never assembles
//! shell commands itself — it receives a ready-to-use transcoder, the same
//! injection pattern as the OCR engine.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::error::ClockSyncError;

/// A video-transcoding capability.
pub trait Transcoder {
    /// Re-encode `input` into `output`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockSyncError::TranscodeFailed`] if the conversion did not
    /// complete.
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), ClockSyncError>;
}

/// [`Transcoder`] backed by an ffmpeg executable, producing H.264 output.
///
/// Invokes `ffmpeg -y -i <input> -c:v libx264 <output>`. The executable
/// path is injected at construction; resolve platform differences before
/// building the transcoder.
///
/// # Example
///
/// ```no_run
/// use clocksync::{FfmpegTranscoder, Transcoder};
/// use std::path::Path;
///
/// let transcoder = FfmpegTranscoder::new("ffmpeg");
/// transcoder.transcode(Path::new("upload.avi"), Path::new("out_h264.mp4"))?;
/// # Ok::<(), clocksync::ClockSyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    executable: PathBuf,
}

impl FfmpegTranscoder {
    /// Create a transcoder that invokes the given ffmpeg executable.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), ClockSyncError> {
        log::info!("Transcoding {input:?} to H.264 at {output:?}");

        let result = Command::new(&self.executable)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-c:v", "libx264"])
            .arg(output)
            .output()
            .map_err(|error| {
                ClockSyncError::TranscodeFailed(format!(
                    "could not launch {}: {error}",
                    self.executable.display()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ClockSyncError::TranscodeFailed(format!(
                "{} exited with {}: {}",
                self.executable.display(),
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
