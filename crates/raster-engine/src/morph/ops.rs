//! Erosion, dilation and their compositions.

use super::structuring::StructuringElement;
use crate::api::EngineError;
use crate::buffer::PixelBuffer;

/// Neighborhood minimum of the red channel.
///
/// On a binarized image (black foreground) this grows dark regions and
/// removes white specks smaller than the element.
pub fn erode(input: &PixelBuffer, se: &StructuringElement) -> Result<PixelBuffer, EngineError> {
    rank_filter(input, se, u8::MAX, u8::min)
}

/// Neighborhood maximum of the red channel.
pub fn dilate(input: &PixelBuffer, se: &StructuringElement) -> Result<PixelBuffer, EngineError> {
    rank_filter(input, se, u8::MIN, u8::max)
}

/// Erosion followed by dilation, each against its own snapshot.
pub fn opening(input: &PixelBuffer, se: &StructuringElement) -> Result<PixelBuffer, EngineError> {
    let eroded = erode(input, se)?;
    dilate(&eroded, se)
}

/// Dilation followed by erosion, each against its own snapshot.
pub fn closing(input: &PixelBuffer, se: &StructuringElement) -> Result<PixelBuffer, EngineError> {
    let dilated = dilate(input, se)?;
    erode(&dilated, se)
}

/// Shared scan for erosion and dilation.
///
/// The output starts as a copy of `input`, so the border ring and all alpha
/// values carry over. Only pixels at least `se.radius()` from every edge are
/// rewritten, and every read goes to `input`.
fn rank_filter(
    input: &PixelBuffer,
    se: &StructuringElement,
    init: u8,
    pick: fn(u8, u8) -> u8,
) -> Result<PixelBuffer, EngineError> {
    input.require_neighborhood()?;
    let mut output = input.clone();

    let r = se.radius();
    let span = r.saturating_mul(2);
    let (w, h) = (input.width(), input.height());
    if w <= span || h <= span {
        return Ok(output);
    }

    for y in r..h - r {
        for x in r..w - r {
            let value = se.offsets().iter().fold(init, |acc, &(dy, dx)| {
                let sx = (x as i64 + dx as i64) as u32;
                let sy = (y as i64 + dy as i64) as u32;
                pick(acc, input.red(sx, sy))
            });
            output.set_gray(x, y, value);
        }
    }

    Ok(output)
}
