//! Validated on-screen clock values.
//!
//! A [`ClockStamp`] is a textual `HH:MM:SS` value as it appears burned into a
//! video frame. Construction guarantees the two-digit/colon shape; it does
//! *not* guarantee the digits form a real wall-clock time (`"99:99:99"` is a
//! well-formed stamp). Range validation happens when a stamp is converted to
//! a [`NaiveTime`] for arithmetic, via [`ClockStamp::as_naive_time`].

use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::NaiveTime;
use regex::Regex;

use crate::error::ClockSyncError;

/// The clock shape scanned for in recognized text: exactly two digits, colon,
/// two digits, colon, two digits. No lookahead, no anchoring.
static CLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}:\d{2}:\d{2}").expect("clock pattern is valid"));

/// The same shape anchored to the full string, for whole-value validation.
static CLOCK_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").expect("clock pattern is valid"));

/// A pattern-validated `HH:MM:SS` clock value.
///
/// Once constructed, a `ClockStamp` is guaranteed to match
/// `^\d{2}:\d{2}:\d{2}$`. Absence of a match yields `None` from the
/// constructors rather than an invalid instance.
///
/// # Example
///
/// ```
/// use clocksync::ClockStamp;
///
/// let stamp = ClockStamp::find_first("recorded at 09:15:00 sharp").unwrap();
/// assert_eq!(stamp.as_str(), "09:15:00");
/// assert!(ClockStamp::new("9:15").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockStamp(String);

impl ClockStamp {
    /// Validate a whole string as a clock value.
    ///
    /// Returns `None` unless `text` is exactly `HH:MM:SS`-shaped. Only the
    /// digit-group shape is checked here — `"99:99:99"` passes.
    pub fn new(text: &str) -> Option<Self> {
        CLOCK_EXACT.is_match(text).then(|| Self(text.to_string()))
    }

    /// Scan `text` left to right and return the first `HH:MM:SS`-shaped
    /// substring, or `None` if the text contains no such substring.
    ///
    /// First match wins; there is deliberately no ranking among multiple
    /// candidates.
    ///
    /// ```
    /// use clocksync::ClockStamp;
    ///
    /// let stamp = ClockStamp::find_first("ts 01:02:03 and 04:05:06").unwrap();
    /// assert_eq!(stamp.as_str(), "01:02:03");
    /// ```
    pub fn find_first(text: &str) -> Option<Self> {
        CLOCK_PATTERN
            .find(text)
            .map(|found| Self(found.as_str().to_string()))
    }

    /// Build a stamp from an already-parsed time of day.
    ///
    /// Infallible: `%H:%M:%S` formatting always produces a pattern-valid
    /// stamp.
    pub fn from_time(time: NaiveTime) -> Self {
        Self(time.format("%H:%M:%S").to_string())
    }

    /// The underlying text, always `HH:MM:SS`-shaped.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the stamp as a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`ClockSyncError::InvalidClock`] when the digit groups are out
    /// of wall-clock range (hours > 23, minutes or seconds > 59).
    pub fn as_naive_time(&self) -> Result<NaiveTime, ClockSyncError> {
        NaiveTime::parse_from_str(&self.0, "%H:%M:%S").map_err(|_| ClockSyncError::InvalidClock {
            value: self.0.clone(),
        })
    }
}

impl fmt::Display for ClockStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClockStamp {
    type Err = ClockSyncError;

    /// Parse a manually entered clock value.
    ///
    /// # Errors
    ///
    /// Returns [`ClockSyncError::InvalidClock`] if `text` is not exactly
    /// `HH:MM:SS`-shaped.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::new(text).ok_or_else(|| ClockSyncError::InvalidClock {
            value: text.to_string(),
        })
    }
}

impl AsRef<str> for ClockStamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
