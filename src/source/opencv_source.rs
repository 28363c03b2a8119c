//! OpenCV-backed frame source
//!
//! Wraps `opencv::videoio::VideoCapture` for file playback. Stream
//! properties are queried once at open time; the read position is mirrored
//! locally so `position()` never has to round-trip through the backend.

use crate::source::FrameSource;
use crate::utils::error::{IntoPlayerError, PlayerError, Result};
use log::{debug, info};
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use std::path::Path;

/// Frame source backed by an OpenCV `VideoCapture`.
pub struct OpenCvFrameSource {
    capture: VideoCapture,
    frame_count: i64,
    fps: f64,
    width: i32,
    height: i32,
    position: i64,
}

impl OpenCvFrameSource {
    /// Open a video file for indexed reading.
    ///
    /// Fails with an `Open` error when the backend cannot open the path or
    /// when the stream reports unusable properties (no frames, zero fps).
    pub fn open(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy();
        let capture =
            VideoCapture::from_file(name.as_ref(), videoio::CAP_ANY).open_err("opening video")?;
        let opened = capture.is_opened().open_err("querying open state")?;
        if !opened {
            return Err(PlayerError::Open(format!(
                "failed to open video at {}",
                path.display()
            )));
        }

        let frame_count = capture
            .get(videoio::CAP_PROP_FRAME_COUNT)
            .open_err("querying frame count")? as i64;
        let fps = capture
            .get(videoio::CAP_PROP_FPS)
            .open_err("querying fps")?;
        let width = capture
            .get(videoio::CAP_PROP_FRAME_WIDTH)
            .open_err("querying width")? as i32;
        let height = capture
            .get(videoio::CAP_PROP_FRAME_HEIGHT)
            .open_err("querying height")? as i32;

        if frame_count <= 0 {
            return Err(PlayerError::Open(format!(
                "video at {} reports no frames",
                path.display()
            )));
        }
        if fps <= 0.0 {
            return Err(PlayerError::Open(format!(
                "video at {} reports unusable fps {}",
                path.display(),
                fps
            )));
        }

        info!(
            "Successfully loaded video from {}\n\tResolution: {} x {}\n\tDuration: {:.2}s ({} frames)\n\tFPS: {}",
            path.display(),
            height,
            width,
            frame_count as f64 / fps,
            frame_count,
            fps
        );

        Ok(Self {
            capture,
            frame_count,
            fps,
            width,
            height,
            position: 0,
        })
    }
}

impl FrameSource for OpenCvFrameSource {
    fn frame_count(&self) -> i64 {
        self.frame_count
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn set_position(&mut self, index: i64) -> Result<()> {
        self.capture
            .set(videoio::CAP_PROP_POS_FRAMES, index as f64)
            .source_err("seeking")?;
        self.position = index;
        Ok(())
    }

    fn read_next(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        let got = self.capture.read(&mut frame).source_err("reading frame")?;
        if !got || frame.empty() {
            return Ok(None);
        }
        self.position += 1;
        Ok(Some(frame))
    }
}

impl Drop for OpenCvFrameSource {
    fn drop(&mut self) {
        // VideoCapture also releases on its own drop; doing it here keeps the
        // teardown visible in the logs on every exit path.
        let _ = self.capture.release();
        debug!("released video capture");
    }
}
