//! Frame-index overlay
//!
//! Draws the `frame: <index> / <last>` label onto a copy of a frame. The
//! text hangs below a fixed top-left origin; the origin is lowered by the
//! measured text height so the label never clips off the top edge.

use crate::utils::error::{IntoPlayerError, Result};
use opencv::core::{Mat, Point, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

const ORIGIN: (i32, i32) = (20, 20);
const FONT_SCALE: f64 = 1.0;
const THICKNESS: i32 = 2;

/// Label text for a shown frame index.
pub fn frame_label(index: i64, last_index: i64) -> String {
    format!("frame: {} / {}", index, last_index)
}

/// Render `text` onto a copy of `frame`. The input frame is not mutated.
pub fn overlay_frame_label(frame: &Mat, text: &str) -> Result<Mat> {
    let font = imgproc::FONT_HERSHEY_SIMPLEX;
    let color = Scalar::all(255.0);

    let mut baseline = 0;
    let text_size = imgproc::get_text_size(text, font, FONT_SCALE, THICKNESS, &mut baseline)
        .render_err("measuring overlay text")?;
    let origin = Point::new(ORIGIN.0, ORIGIN.1 + text_size.height);

    let mut out = frame.try_clone().render_err("copying frame for overlay")?;
    imgproc::put_text(
        &mut out,
        text,
        origin,
        font,
        FONT_SCALE,
        color,
        THICKNESS,
        imgproc::LINE_AA,
        false,
    )
    .render_err("drawing overlay text")?;
    Ok(out)
}
