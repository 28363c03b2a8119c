//! frameview - interactive single-video playback viewer
//!
//! A single-threaded cooperative playback controller: frames are decoded by
//! an indexed frame source, paced by a wall-clock presentation gate, and
//! shown in a named window that accepts keyboard commands for pausing,
//! scrubbing, stepping, fullscreen and the frame-index overlay. Playback
//! loops seamlessly at end of stream.

pub mod dialog;
pub mod display;
pub mod player;
pub mod render;
pub mod shell;
pub mod source;
pub mod utils;
