//! Geometric transforms on whole RGBA buffers.
//!
//! These are plain pixel moves with no neighborhood, so they live outside
//! the engine and work on every channel including alpha.

use raster_engine::{EngineError, PixelBuffer};

/// Value written where no source pixel lands after a translation.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Shift the image by `(dx, dy)`, keeping its dimensions.
///
/// Pixels moved past an edge are dropped; uncovered pixels become
/// [`TRANSPARENT`].
pub fn translate(input: &PixelBuffer, dx: i32, dy: i32) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut output = PixelBuffer::filled(w, h, TRANSPARENT);
    for y in 0..h {
        let ty = y as i64 + dy as i64;
        if ty < 0 || ty >= h as i64 {
            continue;
        }
        for x in 0..w {
            let tx = x as i64 + dx as i64;
            if tx < 0 || tx >= w as i64 {
                continue;
            }
            output.set_pixel(tx as u32, ty as u32, input.pixel(x, y));
        }
    }
    output
}

/// Rotate 90 degrees clockwise. A `w x h` input becomes `h x w`.
pub fn rotate90(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut output = PixelBuffer::filled(h, w, TRANSPARENT);
    // (x, y) -> (h - 1 - y, x)
    for y in 0..h {
        for x in 0..w {
            output.set_pixel(h - 1 - y, x, input.pixel(x, y));
        }
    }
    output
}

/// Flip columns (left becomes right).
pub fn mirror_horizontal(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut output = input.clone();
    for y in 0..h {
        for x in 0..w {
            output.set_pixel(w - 1 - x, y, input.pixel(x, y));
        }
    }
    output
}

/// Flip rows (top becomes bottom).
pub fn mirror_vertical(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut output = input.clone();
    for y in 0..h {
        for x in 0..w {
            output.set_pixel(x, h - 1 - y, input.pixel(x, y));
        }
    }
    output
}

/// Reject scale factors that are not finite and positive.
pub fn check_scale_factor(factor: f64) -> Result<(), EngineError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidParameter {
            name: "scale_factor",
            reason: format!("must be finite and greater than zero, got {factor}"),
        })
    }
}

/// Nearest-neighbour resize by `factor`.
///
/// The output is `round(w * factor) x round(h * factor)`, at least 1x1. Each
/// output pixel copies `in(floor(x / factor), floor(y / factor))`, clamped
/// to the source.
pub fn scale(input: &PixelBuffer, factor: f64) -> Result<PixelBuffer, EngineError> {
    check_scale_factor(factor)?;
    let (w, h) = (input.width(), input.height());
    let out_w = scaled_len(w, factor);
    let out_h = scaled_len(h, factor);

    let mut output = PixelBuffer::filled(out_w, out_h, TRANSPARENT);
    for y in 0..out_h {
        let sy = source_index(y, factor, h);
        for x in 0..out_w {
            let sx = source_index(x, factor, w);
            output.set_pixel(x, y, input.pixel(sx, sy));
        }
    }

    tracing::debug!(from = ?(w, h), to = ?(out_w, out_h), factor, "Scaled image");
    Ok(output)
}

fn scaled_len(len: u32, factor: f64) -> u32 {
    let scaled = (len as f64 * factor).round();
    if scaled >= u32::MAX as f64 {
        u32::MAX
    } else {
        (scaled as u32).max(1)
    }
}

fn source_index(out: u32, factor: f64, len: u32) -> u32 {
    let src = (out as f64 / factor).floor() as u32;
    src.min(len.saturating_sub(1))
}
