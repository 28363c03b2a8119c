//! Dialog collaborators
//!
//! Path picking and the modal frame-number prompt are modeled as explicit
//! collaborator objects owned by the shell, so nothing in the player depends
//! on process-wide GUI state. Cancellation is `None`, never an error.

use crate::utils::error::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// File-open dialog collaborator.
pub trait PathPicker {
    /// Ask the user for a video path, seeding the dialog with the last-used
    /// directory. `None` means the dialog was cancelled.
    fn choose(&mut self, initial_dir: Option<&Path>) -> Option<PathBuf>;
}

/// Modal text input collaborator.
pub trait TextPrompt {
    /// Ask the user for a line of text. `None` means the prompt was
    /// dismissed without input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>>;
}

/// Path picker backed by the native file-open dialog.
#[derive(Debug, Default)]
pub struct FileDialogPicker;

impl PathPicker for FileDialogPicker {
    fn choose(&mut self, initial_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Select a video file");
        if let Some(dir) = initial_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }
}

/// Text prompt reading one line from the controlling terminal.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl TextPrompt for ConsolePrompt {
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        print!("{}: ", label);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // EOF: treat like a dismissed dialog.
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
