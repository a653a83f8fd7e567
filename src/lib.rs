//! # clocksync
//!
//! Extract burned-in clock overlays from video endpoints and compute synced
//! playback windows.
//!
//! `clocksync` reads the `HH:MM:SS` wall clock rendered into a video's first
//! and last frames (via a pluggable OCR engine), resolves a free-text search
//! term against a tabular dataset to a record's timestamp, and reconciles
//! the recognized and chosen clocks into relative playback offsets.
//!
//! ## Quick Start
//!
//! ### Read the clocks at both endpoints
//!
//! ```no_run
//! use clocksync::{read_endpoint_clocks, TesseractEngine, TimestampRecognizer, VideoFile};
//!
//! let mut video = VideoFile::open("input.mp4").unwrap();
//! let recognizer = TimestampRecognizer::new(Box::new(TesseractEngine::new("tesseract")));
//! let clocks = read_endpoint_clocks(&mut video, &recognizer).unwrap();
//! ```
//!
//! ### Resolve a record to a start time
//!
//! ```no_run
//! use clocksync::Dataset;
//!
//! let dataset = Dataset::from_path("visitors.csv").unwrap();
//! if let Some(start) = dataset.resolve("Acme") {
//!     println!("record arrived at {start}");
//! }
//! ```
//!
//! ### Compute the playback window
//!
//! ```
//! use clocksync::{compute_window, ClockStamp};
//!
//! let video_start: ClockStamp = "08:00:00".parse().unwrap();
//! let start: ClockStamp = "08:07:00".parse().unwrap();
//! let end: ClockStamp = "08:12:00".parse().unwrap();
//!
//! let window = compute_window(&video_start, &start, &end).unwrap();
//! assert_eq!((window.start_offset, window.end_offset), (420.0, 720.0));
//! ```
//!
//! ## Design notes
//!
//! - **"No value" is not an error.** A frame with no recognizable clock, a
//!   term matching no record, or an endpoint the decoder cannot supply all
//!   come back as `None`; errors are reserved for broken inputs and failed
//!   engines. See [`ClockSyncError`].
//! - **Capabilities are injected.** The OCR engine
//!   ([`TextRecognizer`]) and the transcoder ([`Transcoder`]) are traits;
//!   executable paths are resolved by the host and passed in at
//!   construction.
//! - **Single-threaded, call-and-return.** No hidden state crosses calls;
//!   the dataset is immutable after load and safe for concurrent reads.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed for `ffmpeg-next`. The
//! bundled [`TesseractEngine`] additionally needs a Tesseract executable at
//! the injected path.

pub mod clock;
pub mod dataset;
pub mod error;
pub mod metadata;
pub mod preprocess;
pub mod recognizer;
pub mod sync;
pub mod transcode;
pub mod video;
pub mod window;

pub use clock::ClockStamp;
pub use dataset::{DATASET_TIME_LAYOUT, Dataset, DatasetRecord, SearchField, narrow_to_prefix};
pub use error::ClockSyncError;
pub use metadata::VideoMetadata;
pub use preprocess::{DEFAULT_THRESHOLD, binarize};
pub use recognizer::{RecognizerConfig, TesseractEngine, TextRecognizer, TimestampRecognizer};
pub use sync::{TimeWindow, compute_window};
pub use transcode::{FfmpegTranscoder, Transcoder};
pub use video::VideoFile;
pub use window::{EndpointClocks, read_endpoint_clocks};
