//! OpenCV highgui window backend
//!
//! Thin wrapper over `opencv::highgui`. Windows are addressed by name, and
//! fullscreen is a window property set right after creation. `wait_key`
//! doubles as the tick loop's bounded poll.

use crate::display::{DisplaySurface, WindowMode};
use crate::utils::error::{IntoPlayerError, Result};
use opencv::core::Mat;
use opencv::highgui;

/// Display surface backed by OpenCV highgui windows.
#[derive(Debug, Default)]
pub struct HighguiSurface;

impl HighguiSurface {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySurface for HighguiSurface {
    fn create_window(&mut self, name: &str, mode: WindowMode) -> Result<()> {
        match mode {
            WindowMode::Windowed => {
                highgui::named_window(name, highgui::WINDOW_AUTOSIZE)
                    .display_err("creating window")?;
            }
            WindowMode::Fullscreen => {
                highgui::named_window(name, highgui::WINDOW_NORMAL)
                    .display_err("creating fullscreen window")?;
                highgui::set_window_property(
                    name,
                    highgui::WND_PROP_FULLSCREEN,
                    highgui::WINDOW_FULLSCREEN as f64,
                )
                .display_err("entering fullscreen")?;
            }
        }
        Ok(())
    }

    fn show(&mut self, name: &str, frame: &Mat) -> Result<()> {
        highgui::imshow(name, frame).display_err("showing frame")
    }

    fn is_visible(&self, name: &str) -> Result<bool> {
        let visible = highgui::get_window_property(name, highgui::WND_PROP_VISIBLE)
            .display_err("querying visibility")?;
        Ok(visible > 0.0)
    }

    fn destroy_window(&mut self, name: &str) -> Result<()> {
        highgui::destroy_window(name).display_err("destroying window")
    }

    fn poll_key(&mut self, timeout_ms: i32) -> Result<Option<i32>> {
        let key = highgui::wait_key(timeout_ms).display_err("polling key")?;
        if key == -1 {
            return Ok(None);
        }
        Ok(Some(key))
    }
}
