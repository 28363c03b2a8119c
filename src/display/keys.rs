//! Key decoding layer
//!
//! Raw key codes from the display backend are decoded here into playback
//! commands, so the controller's state machine never compares against
//! character codes. Matching is case-insensitive; unrecognized keys decode
//! to `None` and are no-ops.

/// Playback commands produced from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Q / Esc: end the session
    Quit,

    /// O: end the session and ask the shell for a new video
    LoadNew,

    /// T: toggle the frame-index overlay
    ToggleOverlay,

    /// F: toggle fullscreen
    ToggleFullscreen,

    /// 0-9: seek to the given tenth of the video
    SeekTenth(u8),

    /// E: pause and prompt for an absolute frame number
    PromptSeek,

    /// A: step one frame backward (paused only)
    StepBack,

    /// D: step one frame forward (paused only)
    StepForward,

    /// S: toggle pause
    TogglePause,
}

const KEY_ESCAPE: u8 = 27;

/// Decode a raw key code into a command.
///
/// The backend may report modifier state in the upper bits; only the low
/// byte identifies the key.
pub fn decode(raw: i32) -> Option<Command> {
    let code = (raw & 0xff) as u8;
    match code {
        b'q' | b'Q' | KEY_ESCAPE => Some(Command::Quit),
        b'o' | b'O' => Some(Command::LoadNew),
        b't' | b'T' => Some(Command::ToggleOverlay),
        b'f' | b'F' => Some(Command::ToggleFullscreen),
        b'0'..=b'9' => Some(Command::SeekTenth(code - b'0')),
        b'e' | b'E' => Some(Command::PromptSeek),
        b'a' | b'A' => Some(Command::StepBack),
        b'd' | b'D' => Some(Command::StepForward),
        b's' | b'S' => Some(Command::TogglePause),
        _ => None,
    }
}
