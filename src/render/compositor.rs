//! Fullscreen composition
//!
//! Letterboxes/pillarboxes an arbitrary-aspect frame into the monitor's
//! pixel box without stretching or cropping. The layout and the blank
//! monitor-sized canvas are computed once per loaded video and reused on
//! every fullscreen draw; composition always works on a copy of the canvas.

use crate::display::MonitorBox;
use crate::utils::error::{IntoPlayerError, Result};
use opencv::core::{self, Mat, Rect, Size};
use opencv::imgproc;
use opencv::prelude::*;

/// Uniform scale and centering offsets for fullscreen display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullscreenLayout {
    pub scale: f64,
    pub scaled_width: i32,
    pub scaled_height: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl FullscreenLayout {
    /// Compute the layout for a frame inside a monitor box.
    ///
    /// The smaller of the two per-axis scales is the only uniform scale
    /// that keeps both scaled dimensions inside the monitor; the driving
    /// axis fills its monitor dimension exactly and the other axis gets the
    /// blank bars. Ties between the axes go to the height-driven scale.
    pub fn compute(frame_width: i32, frame_height: i32, monitor: MonitorBox) -> Self {
        let scale_h = monitor.height as f64 / frame_height as f64;
        let scale_w = monitor.width as f64 / frame_width as f64;

        let (scale, scaled_width, scaled_height) = if scale_h <= scale_w {
            let width = (frame_width as f64 * scale_h).round() as i32;
            (scale_h, width.clamp(1, monitor.width as i32), monitor.height as i32)
        } else {
            let height = (frame_height as f64 * scale_w).round() as i32;
            (scale_w, monitor.width as i32, height.clamp(1, monitor.height as i32))
        };

        Self {
            scale,
            scaled_width,
            scaled_height,
            x_offset: (monitor.width as i32 - scaled_width) / 2,
            y_offset: (monitor.height as i32 - scaled_height) / 2,
        }
    }
}

/// Composites frames onto a cached monitor-sized canvas.
pub struct FullscreenCompositor {
    layout: FullscreenLayout,
    blank: Mat,
}

impl FullscreenCompositor {
    pub fn new(frame_width: i32, frame_height: i32, monitor: MonitorBox) -> Result<Self> {
        let layout = FullscreenLayout::compute(frame_width, frame_height, monitor);
        let blank = Mat::zeros(monitor.height as i32, monitor.width as i32, core::CV_8UC3)
            .render_err("allocating canvas")?
            .to_mat()
            .render_err("allocating canvas")?;
        Ok(Self { layout, blank })
    }

    pub fn layout(&self) -> &FullscreenLayout {
        &self.layout
    }

    /// Scale the frame and paste it centered onto a copy of the blank
    /// canvas. The cached canvas itself is never written to.
    pub fn compose(&self, frame: &Mat) -> Result<Mat> {
        let mut scaled = Mat::default();
        imgproc::resize(
            frame,
            &mut scaled,
            Size::new(self.layout.scaled_width, self.layout.scaled_height),
            0.0,
            0.0,
            imgproc::INTER_LINEAR,
        )
        .render_err("scaling frame")?;

        let mut canvas = self.blank.try_clone().render_err("copying canvas")?;
        {
            let rect = Rect::new(
                self.layout.x_offset,
                self.layout.y_offset,
                self.layout.scaled_width,
                self.layout.scaled_height,
            );
            let mut roi = Mat::roi_mut(&mut canvas, rect).render_err("selecting canvas region")?;
            scaled
                .copy_to(&mut *roi)
                .render_err("pasting scaled frame")?;
        }
        Ok(canvas)
    }
}
