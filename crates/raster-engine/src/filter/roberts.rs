//! Roberts cross edge detector.

use crate::api::EngineError;
use crate::buffer::{quantize, PixelBuffer};

/// Diagonal-difference gradient magnitude of a grayscale image.
///
/// For each `(x, y)` with `x <= width-2` and `y <= height-2`:
///
/// ```text
/// gx = I(x, y)   - I(x+1, y+1)
/// gy = I(x+1, y) - I(x, y+1)
/// out(x, y) = sqrt(gx^2 + gy^2)
/// ```
///
/// `I` is the red channel of `input`, which must already be gray. The last
/// row and last column have no lower-right neighbor; they keep their input
/// intensity. Alpha is copied through.
pub fn roberts_edges(input: &PixelBuffer) -> Result<PixelBuffer, EngineError> {
    input.require_neighborhood()?;
    let mut output = input.clone();

    for y in 0..input.height() - 1 {
        for x in 0..input.width() - 1 {
            let gx = input.red(x, y) as f64 - input.red(x + 1, y + 1) as f64;
            let gy = input.red(x + 1, y) as f64 - input.red(x, y + 1) as f64;
            output.set_gray(x, y, quantize((gx * gx + gy * gy).sqrt()));
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_image_has_no_edges() {
        let buf = PixelBuffer::filled(4, 4, [120, 120, 120, 255]);
        let out = roberts_edges(&buf).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(out.red(x, y), 0);
            }
        }
        // last row/column keep the input
        assert_eq!(out.red(3, 1), 120);
        assert_eq!(out.red(1, 3), 120);
    }

    #[test]
    fn test_vertical_step() {
        // columns 0..2 black, 2..4 white
        let gray = [0, 0, 255, 255].repeat(3);
        let buf = PixelBuffer::from_gray(4, 3, &gray).unwrap();
        let out = roberts_edges(&buf).unwrap();
        // at x=1: gx = 0 - 255, gy = 255 - 0, magnitude = 255*sqrt(2) -> 255
        assert_eq!(out.red(1, 0), 255);
        assert_eq!(out.red(0, 0), 0);
        assert_eq!(out.red(2, 0), 0);
    }

    #[test]
    fn test_small_gradient_magnitude() {
        let buf = PixelBuffer::from_gray(2, 2, &[30, 0, 0, 0]).unwrap();
        let out = roberts_edges(&buf).unwrap();
        assert_eq!(out.red(0, 0), 30);
        assert_eq!(out.pixel(0, 0)[3], 255);
    }
}
