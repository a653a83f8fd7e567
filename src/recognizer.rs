//! Clock recognition over video frames.
//!
//! [`TimestampRecognizer`] turns a raw color frame into a validated
//! [`ClockStamp`]: it binarizes the frame ([`crate::preprocess`]), runs a
//! text-recognition engine over the result, and scans the recognized text
//! for the first `HH:MM:SS`-shaped substring.
//!
//! The engine itself sits behind the [`TextRecognizer`] trait so hosts can
//! plug in whatever OCR backend they have. The bundled [`TesseractEngine`]
//! drives a Tesseract executable whose path is injected at construction —
//! platform-specific path resolution belongs to the host, not to this crate.

use std::{
    io::{Cursor, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use image::{DynamicImage, GrayImage, ImageFormat};

use crate::{
    clock::ClockStamp,
    error::ClockSyncError,
    preprocess::{DEFAULT_THRESHOLD, binarize},
};

/// A text-recognition capability.
///
/// Implementations take a preprocessed binary image and return whatever text
/// they can read from it. Returning an empty string is a normal outcome for
/// an image with no renderable text; errors are reserved for the engine
/// itself failing (missing executable, crashed process, …).
pub trait TextRecognizer {
    /// Recognize text in a binarized image.
    ///
    /// # Errors
    ///
    /// Returns [`ClockSyncError::RecognizerError`] if the engine could not
    /// run to completion.
    fn recognize_text(&self, image: &GrayImage) -> Result<String, ClockSyncError>;
}

/// [`TextRecognizer`] backed by a Tesseract executable.
///
/// The image is piped through the child process (`tesseract stdin stdout`),
/// so no intermediate files are written. Defaults match line-oriented overlay
/// text: OCR engine mode 3 and page segmentation mode 6 ("assume a single
/// uniform block of text") — a full-page layout mode would hunt for columns
/// and paragraphs that a clock overlay does not have.
///
/// # Example
///
/// ```no_run
/// use clocksync::{TesseractEngine, TimestampRecognizer};
///
/// let engine = TesseractEngine::new("/usr/bin/tesseract");
/// let recognizer = TimestampRecognizer::new(Box::new(engine));
/// ```
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    executable: PathBuf,
    oem: u8,
    psm: u8,
}

impl TesseractEngine {
    /// Create an engine that invokes the given executable.
    ///
    /// The path is taken as-is; resolve platform differences before
    /// constructing the engine.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            oem: 3,
            psm: 6,
        }
    }

    /// Override the OCR engine mode (`--oem`).
    #[must_use]
    pub fn with_oem(mut self, oem: u8) -> Self {
        self.oem = oem;
        self
    }

    /// Override the page segmentation mode (`--psm`).
    ///
    /// Keep this line-oriented (6 or 7) for overlay text.
    #[must_use]
    pub fn with_psm(mut self, psm: u8) -> Self {
        self.psm = psm;
        self
    }
}

impl TextRecognizer for TesseractEngine {
    fn recognize_text(&self, image: &GrayImage) -> Result<String, ClockSyncError> {
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let mut child = Command::new(&self.executable)
            .arg("stdin")
            .arg("stdout")
            .args(["--oem", &self.oem.to_string()])
            .args(["--psm", &self.psm.to_string()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| {
                ClockSyncError::RecognizerError(format!(
                    "could not launch {}: {error}",
                    self.executable.display()
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&png)?;
        }

        let output = child.wait_with_output().map_err(|error| {
            ClockSyncError::RecognizerError(format!(
                "{} did not run to completion: {error}",
                self.executable.display()
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClockSyncError::RecognizerError(format!(
                "{} exited with {}: {}",
                self.executable.display(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Settings for clock recognition.
///
/// A default-constructed config reproduces the stock pipeline; the threshold
/// is the only tunable today.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Binarization cutoff handed to [`binarize`].
    pub threshold: u8,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RecognizerConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the binarization cutoff.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Extracts a burned-in clock value from a single frame.
///
/// Owns a boxed [`TextRecognizer`] engine; each [`recognize`] call is
/// independent — there is no hidden state, no memoization, and no retry with
/// alternate preprocessing.
///
/// [`recognize`]: TimestampRecognizer::recognize
pub struct TimestampRecognizer {
    engine: Box<dyn TextRecognizer>,
    config: RecognizerConfig,
}

impl TimestampRecognizer {
    /// Create a recognizer with default settings.
    pub fn new(engine: Box<dyn TextRecognizer>) -> Self {
        Self::with_config(engine, RecognizerConfig::default())
    }

    /// Create a recognizer with explicit settings.
    pub fn with_config(engine: Box<dyn TextRecognizer>, config: RecognizerConfig) -> Self {
        Self { engine, config }
    }

    /// Recognize the clock burned into `frame`.
    ///
    /// The frame is binarized, passed to the engine, and the recognized text
    /// scanned left to right for the first `HH:MM:SS`-shaped substring.
    /// `Ok(None)` means the engine ran but no clock-shaped text was found —
    /// a normal outcome for frames without an overlay, final for this frame.
    ///
    /// The raw recognized text is logged at debug level for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`ClockSyncError::RecognizerError`] (or an encoding error)
    /// only when the engine itself could not run.
    pub fn recognize(&self, frame: &DynamicImage) -> Result<Option<ClockStamp>, ClockSyncError> {
        let binary = binarize(frame, self.config.threshold);
        let text = self.engine.recognize_text(&binary)?;
        log::debug!("Recognized text ({} chars): {:?}", text.len(), text);
        Ok(ClockStamp::find_first(&text))
    }
}
