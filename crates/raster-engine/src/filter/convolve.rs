//! Snapshot-based 3x3 convolution.

use super::kernel::Kernel3x3;
use crate::api::EngineError;
use crate::buffer::{quantize, PixelBuffer};

/// Convolve R, G and B with a 3x3 kernel, returning a new buffer.
///
/// Every weighted sum reads the untouched `input`, never a value written
/// earlier in the same pass. Only pixels with a full neighborhood
/// (`1 <= x <= width-2`, `1 <= y <= height-2`) are rewritten; the outer
/// one-pixel ring and every alpha value are copied through unchanged.
///
/// # Errors
///
/// [`EngineError::InvalidDimensions`] if the image is narrower or shorter
/// than two pixels.
pub fn convolve3x3(input: &PixelBuffer, kernel: &Kernel3x3) -> Result<PixelBuffer, EngineError> {
    input.require_neighborhood()?;
    let mut output = input.clone();
    let (w, h) = (input.width(), input.height());

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut acc = [0.0f64; 3];
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let weight = kernel.weight(dx, dy);
                    let px = input.pixel((x as i32 + dx) as u32, (y as i32 + dy) as u32);
                    for (sum, &c) in acc.iter_mut().zip(&px[..3]) {
                        *sum += weight * c as f64;
                    }
                }
            }
            let alpha = input.pixel(x, y)[3];
            output.set_pixel(
                x,
                y,
                [quantize(acc[0]), quantize(acc[1]), quantize(acc[2]), alpha],
            );
        }
    }

    Ok(output)
}
