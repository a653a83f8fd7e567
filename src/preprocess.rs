//! Frame preprocessing for text recognition.
//!
//! Burned-in clock overlays are small, high-contrast text. Recognition works
//! far better on a clean binary image than on the raw color frame, so the
//! pipeline reduces each frame to single-channel luminance and applies a
//! fixed binary threshold before handing it to the engine.

use image::{DynamicImage, GrayImage};

/// Default binarization cutoff on the 0–255 luminance scale.
///
/// Samples at or above the cutoff become 255 ("on"), everything below
/// becomes 0.
pub const DEFAULT_THRESHOLD: u8 = 150;

/// Convert a decoded color frame into a binary image.
///
/// Deterministic and side-effect free; any well-formed frame produces an
/// output with identical spatial dimensions. There are no error conditions.
///
/// ```
/// use clocksync::{binarize, DEFAULT_THRESHOLD};
/// use image::DynamicImage;
///
/// let frame = DynamicImage::new_rgb8(64, 32);
/// let binary = binarize(&frame, DEFAULT_THRESHOLD);
/// assert_eq!((binary.width(), binary.height()), (64, 32));
/// ```
pub fn binarize(frame: &DynamicImage, threshold: u8) -> GrayImage {
    let mut gray = frame.to_luma8();
    for pixel in gray.pixels_mut() {
        pixel.0[0] = if pixel.0[0] >= threshold { 255 } else { 0 };
    }
    gray
}
