//! Playback control for frameview
//!
//! This module owns playback state and the command-dispatch state machine.
//! The controller drives the frame source, compositor, overlay renderer and
//! display surface once per tick of a single-threaded cooperative loop.

mod controller;
mod session;

pub use controller::PlaybackController;
pub use session::{wrap_frame_index, PlaybackSession};

/// How a playback session ended.
///
/// Both outcomes are terminal for the session and hand control back to the
/// shell; errors propagate separately as `PlayerError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user asked to quit the player
    Quit,

    /// The user asked to load a different video
    LoadNew,
}
