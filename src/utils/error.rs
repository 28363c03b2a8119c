//! Error types for frameview
//!
//! This module defines the error taxonomy used throughout the application.
//! We use thiserror for the error type definition and anyhow at the binary
//! boundary.
//!
//! Recoverable conditions are deliberately not represented here: end of
//! stream loops playback back to frame zero, a cancelled dialog surfaces as
//! `Option::None`, and an unparseable frame-number entry is ignored without
//! touching playback state.

use thiserror::Error;

/// Main error type for frameview
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The video could not be opened. Fatal for the load attempt; the shell
    /// may re-prompt for a path.
    #[error("Open error: {0}")]
    Open(String),

    /// A frame read failed and the single re-seek retry also failed.
    #[error("Read error: frame {index} could not be decoded after retry")]
    Read { index: i64 },

    /// Frame source backend errors other than retry exhaustion
    #[error("Source error: {0}")]
    Source(String),

    /// Window/display errors
    #[error("Display error: {0}")]
    Display(String),

    /// Monitor geometry errors
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Frame composition / overlay rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration persistence errors
    #[error("Config error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),
}

/// Convenience type alias for Results in frameview
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Extension trait for converting foreign errors into PlayerError with context
pub trait IntoPlayerError<T> {
    fn open_err(self, context: &str) -> Result<T>;
    fn source_err(self, context: &str) -> Result<T>;
    fn display_err(self, context: &str) -> Result<T>;
    fn geometry_err(self, context: &str) -> Result<T>;
    fn render_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPlayerError<T> for std::result::Result<T, E> {
    fn open_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Open(format!("{}: {}", context, e)))
    }

    fn source_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Source(format!("{}: {}", context, e)))
    }

    fn display_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Display(format!("{}: {}", context, e)))
    }

    fn geometry_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Geometry(format!("{}: {}", context, e)))
    }

    fn render_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Render(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Config(format!("{}: {}", context, e)))
    }
}
