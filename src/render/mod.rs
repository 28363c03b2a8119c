//! Frame rendering for frameview
//!
//! CPU-side frame preparation: aspect-preserving fullscreen composition and
//! the frame-index text overlay. Both operate on copies; decoded frames are
//! never mutated in place.

pub mod compositor;
pub mod overlay;

pub use compositor::{FullscreenCompositor, FullscreenLayout};
pub use overlay::{frame_label, overlay_frame_label};
