//! Display module for frameview
//!
//! This module defines the contracts the playback controller requires from
//! the windowing backend: named windows that can blit a frame, a
//! non-blocking key poll, and a visibility query. It also hosts the
//! key-decoding layer that turns raw key codes into playback commands, and
//! the monitor-geometry query used for fullscreen layout.

pub mod geometry;
pub mod highgui_surface;
pub mod keys;

pub use geometry::{DisplayGeometry, MonitorBox, WinitGeometry};
pub use highgui_surface::HighguiSurface;
pub use keys::Command;

use crate::utils::error::Result;
use opencv::core::Mat;

/// How a window should be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// A normal window sized to its content
    Windowed,

    /// A borderless window covering the primary monitor
    Fullscreen,
}

/// Display surface trait defining the interface for window backends.
pub trait DisplaySurface {
    /// Create (or re-create) a named window in the given mode.
    ///
    /// Creating a window that already exists is a no-op at the backend
    /// level, which makes this safe to call from the visibility self-heal
    /// path.
    fn create_window(&mut self, name: &str, mode: WindowMode) -> Result<()>;

    /// Blit a frame into the named window
    fn show(&mut self, name: &str, frame: &Mat) -> Result<()>;

    /// Whether the named window is currently visible to the user
    fn is_visible(&self, name: &str) -> Result<bool>;

    /// Destroy the named window
    fn destroy_window(&mut self, name: &str) -> Result<()>;

    /// Poll for a pressed key, waiting at most `timeout_ms` milliseconds.
    ///
    /// Returns `None` when no key was pressed within the timeout. This is
    /// the only place the tick loop is allowed to block.
    fn poll_key(&mut self, timeout_ms: i32) -> Result<Option<i32>>;
}
