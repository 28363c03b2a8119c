//! Session shell
//!
//! Resolves the initial video path (command-line argument or
//! remembered-directory file picker), runs playback sessions, and services
//! reload requests. The shell owns the display surface and dialog
//! collaborators across sessions; each frame source lives exactly as long
//! as its session.

use crate::dialog::{PathPicker, TextPrompt};
use crate::display::{DisplaySurface, MonitorBox};
use crate::player::{PlaybackController, SessionOutcome};
use crate::source::OpenCvFrameSource;
use crate::utils::error::Result;
use crate::utils::LastDirStore;

use log::{error, info};
use std::path::PathBuf;

/// Runs playback sessions until the user quits.
pub struct SessionShell<'a> {
    surface: &'a mut dyn DisplaySurface,
    picker: &'a mut dyn PathPicker,
    prompt: &'a mut dyn TextPrompt,
    monitor: MonitorBox,
    last_dir: LastDirStore,
}

impl<'a> SessionShell<'a> {
    pub fn new(
        surface: &'a mut dyn DisplaySurface,
        picker: &'a mut dyn PathPicker,
        prompt: &'a mut dyn TextPrompt,
        monitor: MonitorBox,
        last_dir: LastDirStore,
    ) -> Self {
        Self {
            surface,
            picker,
            prompt,
            monitor,
            last_dir,
        }
    }

    /// Play videos until quit. `initial` comes from the command line; when
    /// absent the file picker is opened, seeded with the remembered
    /// directory.
    ///
    /// An unopenable path from the picker re-prompts; an unopenable path
    /// from the command line is fatal. Cancelling the picker at startup
    /// exits quietly, and cancelling it on reload restarts the current
    /// video.
    pub fn run(&mut self, initial: Option<PathBuf>) -> Result<()> {
        let mut from_picker = initial.is_none();
        let mut path = match initial.or_else(|| self.pick()) {
            Some(path) => path,
            None => {
                info!("no video selected");
                return Ok(());
            }
        };

        loop {
            let mut source = match OpenCvFrameSource::open(&path) {
                Ok(source) => source,
                Err(e) if from_picker => {
                    error!("{}", e);
                    match self.pick() {
                        Some(next) => {
                            path = next;
                            continue;
                        }
                        None => {
                            info!("no video selected");
                            return Ok(());
                        }
                    }
                }
                Err(e) => return Err(e),
            };
            self.last_dir.store_parent_of(&path);

            let window = path.display().to_string();
            let outcome = PlaybackController::new(
                &mut source,
                self.surface,
                self.prompt,
                self.monitor,
                window,
            )
            .run()?;

            // Release the decoder before another one can be opened.
            drop(source);

            match outcome {
                SessionOutcome::Quit => return Ok(()),
                SessionOutcome::LoadNew => match self.pick() {
                    Some(next) => {
                        path = next;
                        from_picker = true;
                    }
                    None => {
                        info!("load cancelled, restarting current video");
                    }
                },
            }
        }
    }

    fn pick(&mut self) -> Option<PathBuf> {
        let initial = self.last_dir.read();
        self.picker.choose(initial.as_deref())
    }
}
