//! Frame source module for frameview
//!
//! This module defines the contract the playback controller requires from a
//! video decode backend: random-access reads of decoded frames by index plus
//! the stream properties needed for pacing and layout. The production
//! implementation wraps OpenCV's `VideoCapture`.

mod opencv_source;

pub use opencv_source::OpenCvFrameSource;

use crate::utils::error::Result;
use opencv::core::Mat;

/// Frame source trait defining the interface for indexed video decoding.
///
/// Positions are frame indices. `position()` is the index of the next frame
/// `read_next` will return; a successful read advances it by one. Callers
/// are expected to pre-wrap seek targets into `[0, frame_count)`.
pub trait FrameSource {
    /// Total number of frames in the video
    fn frame_count(&self) -> i64;

    /// Nominal frames per second
    fn fps(&self) -> f64;

    /// Frame width in pixels
    fn width(&self) -> i32;

    /// Frame height in pixels
    fn height(&self) -> i32;

    /// Index of the next frame to be read
    fn position(&self) -> i64;

    /// Move the read position to an absolute frame index
    fn set_position(&mut self, index: i64) -> Result<()>;

    /// Decode the frame at the current position and advance by one.
    ///
    /// Returns `Ok(None)` when no frame could be produced at the current
    /// position; the caller decides whether that means end of stream or a
    /// transient decode failure.
    fn read_next(&mut self) -> Result<Option<Mat>>;
}
