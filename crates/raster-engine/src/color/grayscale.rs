//! Luma conversion and binarization.
//!
//! Both operations are pointwise, so they rewrite the buffer in place.
//! Alpha is never touched.

use crate::api::EngineError;
use crate::buffer::{quantize, PixelBuffer};

/// Default binarization threshold.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// ITU-R BT.601 luma weights for R, G, B.
const LUMA: [f64; 3] = [0.299, 0.587, 0.114];

/// Replace every pixel's colour with its luma, `R = G = B = Y`.
///
/// Idempotent: a gray pixel maps back onto itself.
pub fn to_grayscale(buffer: &mut PixelBuffer) {
    for px in buffer.pixels_mut() {
        let luma =
            LUMA[0] * px[0] as f64 + LUMA[1] * px[1] as f64 + LUMA[2] * px[2] as f64;
        let y = quantize(luma);
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
}

/// Map each pixel to black (`red < threshold`) or white, reading the red channel.
///
/// Expects an equalized buffer (see [`to_grayscale`]). Output channels are
/// only ever `0` or `255`.
pub fn binarize(buffer: &mut PixelBuffer, threshold: u8) {
    for px in buffer.pixels_mut() {
        let v = if px[0] < threshold { 0 } else { 255 };
        px[0] = v;
        px[1] = v;
        px[2] = v;
    }
}

/// Validate an untyped threshold (from configuration or the command line).
pub fn threshold_from(value: i64) -> Result<u8, EngineError> {
    u8::try_from(value).map_err(|_| {
        EngineError::parameter("threshold", format!("must be within 0..=255, got {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffer() -> PixelBuffer {
        let samples = vec![
            255, 0, 0, 255, //
            0, 255, 0, 128, //
            0, 0, 255, 0, //
            12, 200, 99, 77,
        ];
        PixelBuffer::new(2, 2, samples).unwrap()
    }

    #[test]
    fn test_grayscale_weights() {
        let mut buf = sample_buffer();
        to_grayscale(&mut buf);
        assert_eq!(buf.pixel(0, 0), [76, 76, 76, 255]);
        assert_eq!(buf.pixel(1, 0), [150, 150, 150, 128]);
        assert_eq!(buf.pixel(0, 1), [29, 29, 29, 0]);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let mut once = sample_buffer();
        to_grayscale(&mut once);
        let mut twice = once.clone();
        to_grayscale(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_grayscale_keeps_every_gray_level() {
        let gray: Vec<u8> = (0..=255).collect();
        let mut buf = PixelBuffer::from_gray(256, 1, &gray).unwrap();
        to_grayscale(&mut buf);
        for x in 0..256u32 {
            assert_eq!(buf.red(x, 0), x as u8, "gray level {x} drifted");
        }
    }

    #[test]
    fn test_binarize_only_black_or_white() {
        let gray: Vec<u8> = (0..=255).collect();
        let mut buf = PixelBuffer::from_gray(16, 16, &gray).unwrap();
        binarize(&mut buf, DEFAULT_THRESHOLD);
        for px in buf.pixels() {
            assert!(px[0] == 0 || px[0] == 255);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
        assert_eq!(buf.red(15, 7), 0); // 127
        assert_eq!(buf.red(0, 8), 255); // 128
    }

    #[test]
    fn test_binarize_idempotent_and_keeps_alpha() {
        let mut buf = sample_buffer();
        to_grayscale(&mut buf);
        binarize(&mut buf, 100);
        let first = buf.clone();
        binarize(&mut buf, 100);
        assert_eq!(first, buf);
        assert_eq!(buf.pixel(1, 1)[3], 77);
    }

    #[test]
    fn test_threshold_validation() {
        assert_eq!(threshold_from(0).unwrap(), 0);
        assert_eq!(threshold_from(255).unwrap(), 255);
        assert!(matches!(
            threshold_from(256),
            Err(EngineError::InvalidParameter { name: "threshold", .. })
        ));
        assert!(threshold_from(-1).is_err());
    }
}
