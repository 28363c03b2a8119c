//! Playback session state
//!
//! The live state while one video is open: the read position, the
//! independent mode flags, and the immutable presentation interval derived
//! from the stream's nominal fps. A session is created per load and its
//! flags always start from the same defaults.

use log::info;
use std::time::Duration;

/// Wrap an arbitrary frame index into `[0, frame_count)`.
///
/// Negative indices wrap to the tail, so stepping back past frame zero
/// lands near the end of the video instead of failing.
pub fn wrap_frame_index(index: i64, frame_count: i64) -> i64 {
    debug_assert!(frame_count > 0);
    index.rem_euclid(frame_count)
}

/// Live playback state for one loaded video.
#[derive(Debug)]
pub struct PlaybackSession {
    /// Index of the next frame to be read
    pub frame_position: i64,

    /// Playback is paused
    pub paused: bool,

    /// Frames are composited to the monitor box before display
    pub fullscreen: bool,

    /// The frame-index overlay is drawn
    pub show_overlay: bool,

    /// The user asked to quit
    pub quit_requested: bool,

    /// The user asked to load a different video
    pub load_new_requested: bool,

    /// Nominal time between presented frames, `1 / fps`
    pub frame_interval: Duration,

    frame_count: i64,
}

impl PlaybackSession {
    /// Fresh session with all flags at their defaults.
    pub fn new(frame_count: i64, fps: f64) -> Self {
        debug_assert!(frame_count > 0);
        debug_assert!(fps > 0.0);
        Self {
            frame_position: 0,
            paused: false,
            fullscreen: false,
            show_overlay: true,
            quit_requested: false,
            load_new_requested: false,
            frame_interval: Duration::from_secs_f64(1.0 / fps),
            frame_count,
        }
    }

    pub fn frame_count(&self) -> i64 {
        self.frame_count
    }

    /// Index of the last frame of the video, for the overlay label.
    pub fn last_frame_index(&self) -> i64 {
        self.frame_count - 1
    }

    /// Move the read position to `target`, wrapping into the valid range.
    /// Returns the wrapped position.
    pub fn seek(&mut self, target: i64) -> i64 {
        if target < 0 {
            info!("negative frame target {}, looping to end of video", target);
        }
        let wrapped = wrap_frame_index(target, self.frame_count);
        self.frame_position = wrapped;
        wrapped
    }

    /// Absolute position for a digit-key scrub: `digit/10` of the video.
    pub fn tenth_target(&self, digit: u8) -> i64 {
        ((f64::from(digit) / 10.0) * self.frame_count as f64).floor() as i64
    }
}
