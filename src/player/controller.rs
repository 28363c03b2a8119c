//! Playback controller
//!
//! Single-threaded cooperative tick loop. Each tick reads at most one frame,
//! self-heals the window, gates presentation on the wall clock, and
//! dispatches at most one decoded key command. Cancellation is flag-driven:
//! the loop always finishes its tick before honoring quit or load-new.

use crate::dialog::TextPrompt;
use crate::display::keys::{self, Command};
use crate::display::{DisplaySurface, MonitorBox, WindowMode};
use crate::player::session::PlaybackSession;
use crate::player::SessionOutcome;
use crate::render::compositor::FullscreenCompositor;
use crate::render::overlay::{frame_label, overlay_frame_label};
use crate::source::FrameSource;
use crate::utils::error::{PlayerError, Result};

use log::{debug, info, warn};
use opencv::core::Mat;
use std::time::Instant;

/// Poll granularity of the tick loop, in milliseconds.
const KEY_POLL_MS: i32 = 1;

/// Positions stepped back for overlay toggles and single-steps while
/// paused. Compensates for the read-ahead frame that was decoded but never
/// shown; changing it changes which frame a paused step lands on.
const PAUSED_STEP_BACK: i64 = 3;

/// Positions stepped back when fullscreen is toggled while paused.
const FULLSCREEN_STEP_BACK: i64 = 2;

/// The decoded frame and its overlaid copy, kept together so the overlay
/// can be toggled without a re-read.
struct FramePair {
    plain: Mat,
    overlaid: Mat,
}

/// Drives one playback session over borrowed collaborators.
pub struct PlaybackController<'a> {
    source: &'a mut dyn FrameSource,
    surface: &'a mut dyn DisplaySurface,
    prompt: &'a mut dyn TextPrompt,
    monitor: MonitorBox,
    window: String,
    session: PlaybackSession,
    compositor: Option<FullscreenCompositor>,
}

impl<'a> PlaybackController<'a> {
    /// Controller for an already-opened source. Flags start from their
    /// defaults; the fullscreen layout is computed lazily on the first
    /// fullscreen frame.
    pub fn new(
        source: &'a mut dyn FrameSource,
        surface: &'a mut dyn DisplaySurface,
        prompt: &'a mut dyn TextPrompt,
        monitor: MonitorBox,
        window: String,
    ) -> Self {
        let session = PlaybackSession::new(source.frame_count(), source.fps());
        Self {
            source,
            surface,
            prompt,
            monitor,
            window,
            session,
            compositor: None,
        }
    }

    /// Run the session until the user quits or asks for a new video.
    ///
    /// The window is torn down on every exit path, including errors; the
    /// frame source is released by its owner.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let outcome = self.play();
        if let Err(e) = self.surface.destroy_window(&self.window) {
            debug!("window teardown: {}", e);
        }
        outcome
    }

    fn play(&mut self) -> Result<SessionOutcome> {
        self.surface.create_window(&self.window, self.window_mode())?;

        let mut clock = Instant::now();
        let mut needs_frame = true;
        let mut force_draw = false;
        let mut pending: Option<FramePair> = None;

        loop {
            if self.session.quit_requested {
                return Ok(SessionOutcome::Quit);
            }
            if self.session.load_new_requested {
                return Ok(SessionOutcome::LoadNew);
            }

            if needs_frame {
                pending = Some(self.prepare_frame()?);
                needs_frame = false;
            }

            // Minimizing or closing the window does not end the session;
            // only quit does. Bring the window back if it disappeared.
            if !self.surface.is_visible(&self.window)? {
                self.surface.create_window(&self.window, self.window_mode())?;
            }

            // Presentation gate. While paused the reference keeps resetting
            // so no time accumulates; otherwise it resets only at the
            // moment of an actual draw, which keeps pacing drift-free no
            // matter how fast the tick loop spins.
            let due = if force_draw {
                true
            } else if self.session.paused {
                clock = Instant::now();
                false
            } else {
                clock.elapsed() >= self.session.frame_interval
            };

            if due {
                if let Some(pair) = pending.as_ref() {
                    let shown = if self.session.show_overlay {
                        &pair.overlaid
                    } else {
                        &pair.plain
                    };
                    self.surface.show(&self.window, shown)?;
                }
                clock = Instant::now();
                force_draw = false;
                needs_frame = true;
            }

            if let Some(raw) = self.surface.poll_key(KEY_POLL_MS)? {
                if let Some(command) = keys::decode(raw) {
                    self.dispatch(command, &mut needs_frame, &mut force_draw)?;
                }
            }
        }
    }

    /// Read the next frame and produce both display copies.
    fn prepare_frame(&mut self) -> Result<FramePair> {
        let raw = self.next_frame()?;
        let plain = if self.session.fullscreen {
            self.fullscreen_compositor()?.compose(&raw)?
        } else {
            raw
        };
        let label = frame_label(
            self.session.frame_position - 1,
            self.session.last_frame_index(),
        );
        let overlaid = overlay_frame_label(&plain, &label)?;
        Ok(FramePair { plain, overlaid })
    }

    /// Read with the recovery policy: end of stream loops back to frame
    /// zero, a transient failure gets one re-seek retry, and only an
    /// exhausted retry is fatal.
    fn next_frame(&mut self) -> Result<Mat> {
        loop {
            if let Some(frame) = self.source.read_next()? {
                self.session.frame_position += 1;
                return Ok(frame);
            }

            if self.session.frame_position >= self.session.frame_count() {
                info!("end of video reached, looping to frame 0");
                self.seek_to(0)?;
                continue;
            }

            let position = self.session.frame_position;
            warn!("frame read failed at {}, re-seeking and retrying", position);
            self.source.set_position(position)?;
            match self.source.read_next()? {
                Some(frame) => {
                    self.session.frame_position += 1;
                    return Ok(frame);
                }
                None => return Err(PlayerError::Read { index: position }),
            }
        }
    }

    fn dispatch(
        &mut self,
        command: Command,
        needs_frame: &mut bool,
        force_draw: &mut bool,
    ) -> Result<()> {
        match command {
            Command::Quit => {
                self.session.quit_requested = true;
            }
            Command::LoadNew => {
                self.session.load_new_requested = true;
            }
            Command::TogglePause => {
                self.session.paused = !self.session.paused;
            }
            Command::ToggleOverlay => {
                self.session.show_overlay = !self.session.show_overlay;
                if self.session.paused {
                    self.seek_to(self.session.frame_position - PAUSED_STEP_BACK)?;
                    *needs_frame = true;
                    *force_draw = true;
                }
            }
            Command::ToggleFullscreen => {
                self.session.fullscreen = !self.session.fullscreen;
                debug!(
                    "fullscreen {}",
                    if self.session.fullscreen { "on" } else { "off" }
                );
                self.surface.destroy_window(&self.window)?;
                self.surface.create_window(&self.window, self.window_mode())?;
                if self.session.paused {
                    self.seek_to(self.session.frame_position - FULLSCREEN_STEP_BACK)?;
                }
                // The pending frame was prepared for the old mode.
                *needs_frame = true;
                *force_draw = true;
            }
            Command::SeekTenth(digit) => {
                let target = self.session.tenth_target(digit);
                debug!("scrub to tenth {} (frame {})", digit, target);
                self.seek_to(target)?;
                *needs_frame = true;
                *force_draw = true;
            }
            Command::PromptSeek => {
                self.session.paused = true;
                if let Some(entry) = self.prompt.prompt("frame number")? {
                    match entry.trim().parse::<i64>() {
                        Ok(index) if (0..self.session.frame_count()).contains(&index) => {
                            self.seek_to(index)?;
                            *needs_frame = true;
                            *force_draw = true;
                        }
                        _ => debug!("ignoring frame-number entry {:?}", entry),
                    }
                }
            }
            Command::StepBack => {
                if self.session.paused {
                    self.seek_to(self.session.frame_position - PAUSED_STEP_BACK)?;
                    *needs_frame = true;
                    *force_draw = true;
                }
            }
            Command::StepForward => {
                if self.session.paused {
                    // The pending read-ahead frame is exactly one ahead of
                    // the screen; drawing it is the forward step.
                    *force_draw = true;
                }
            }
        }
        Ok(())
    }

    fn seek_to(&mut self, target: i64) -> Result<()> {
        let wrapped = self.session.seek(target);
        self.source.set_position(wrapped)
    }

    fn window_mode(&self) -> WindowMode {
        if self.session.fullscreen {
            WindowMode::Fullscreen
        } else {
            WindowMode::Windowed
        }
    }

    /// Layout and canvas, computed from source metadata on first use and
    /// then held for the session.
    fn fullscreen_compositor(&mut self) -> Result<&FullscreenCompositor> {
        let compositor = match self.compositor.take() {
            Some(compositor) => compositor,
            None => {
                let compositor = FullscreenCompositor::new(
                    self.source.width(),
                    self.source.height(),
                    self.monitor,
                )?;
                let layout = compositor.layout();
                debug!(
                    "fullscreen layout: {}x{} at +{}+{} (scale {:.3})",
                    layout.scaled_width, layout.scaled_height, layout.x_offset, layout.y_offset, layout.scale
                );
                compositor
            }
        };
        Ok(self.compositor.insert(compositor))
    }
}
