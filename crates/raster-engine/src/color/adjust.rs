//! Brightness and contrast adjustment on R, G, B.

use crate::api::EngineError;
use crate::buffer::{quantize, PixelBuffer};

/// Contrast amount at which the factor's denominator `255 * (259 - amount)` vanishes.
const CONTRAST_POLE: i16 = 259;

/// Add `delta` to every colour channel, clamping into `0..=255`.
pub fn adjust_brightness(buffer: &mut PixelBuffer, delta: i16) {
    for px in buffer.pixels_mut() {
        for c in &mut px[..3] {
            *c = (*c as i32 + delta as i32).clamp(0, 255) as u8;
        }
    }
}

/// Stretch colour channels around mid-gray.
///
/// `factor = 259 * (amount + 255) / (255 * (259 - amount))`, then each channel
/// becomes `factor * (c - 128) + 128`. Positive amounts increase contrast,
/// negative amounts flatten it.
///
/// # Errors
///
/// `amount == 259` is rejected before any arithmetic runs.
pub fn adjust_contrast(buffer: &mut PixelBuffer, amount: i16) -> Result<(), EngineError> {
    let factor = contrast_factor(amount)?;
    for px in buffer.pixels_mut() {
        for c in &mut px[..3] {
            *c = quantize(factor * (*c as f64 - 128.0) + 128.0);
        }
    }
    Ok(())
}

fn contrast_factor(amount: i16) -> Result<f64, EngineError> {
    if amount == CONTRAST_POLE {
        return Err(EngineError::parameter(
            "contrast_amount",
            "259 makes the contrast factor divide by zero",
        ));
    }
    let amount = amount as f64;
    Ok(259.0 * (amount + 255.0) / (255.0 * (259.0 - amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_clamps() {
        let mut buf = PixelBuffer::from_gray(3, 1, &[0, 100, 240]).unwrap();
        adjust_brightness(&mut buf, 40);
        assert_eq!(buf.pixel(0, 0), [40, 40, 40, 255]);
        assert_eq!(buf.pixel(1, 0), [140, 140, 140, 255]);
        assert_eq!(buf.pixel(2, 0), [255, 255, 255, 255]);

        adjust_brightness(&mut buf, -200);
        assert_eq!(buf.red(0, 0), 0);
        assert_eq!(buf.red(2, 0), 55);
    }

    #[test]
    fn test_brightness_full_delta_range() {
        let mut buf = PixelBuffer::from_gray(2, 1, &[0, 255]).unwrap();
        adjust_brightness(&mut buf, i16::MAX);
        assert_eq!(buf.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(buf.pixel(1, 0), [255, 255, 255, 255]);

        adjust_brightness(&mut buf, i16::MIN);
        assert_eq!(buf.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(buf.pixel(1, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_contrast_zero_is_identity() {
        let gray: Vec<u8> = (0..=255).collect();
        let mut buf = PixelBuffer::from_gray(256, 1, &gray).unwrap();
        let before = buf.clone();
        adjust_contrast(&mut buf, 0).unwrap();
        assert_eq!(buf, before);
    }

    #[test]
    fn test_contrast_spreads_around_midpoint() {
        let mut buf = PixelBuffer::from_gray(3, 1, &[100, 128, 160]).unwrap();
        adjust_contrast(&mut buf, 30).unwrap();
        assert!(buf.red(0, 0) < 100);
        assert_eq!(buf.red(1, 0), 128);
        assert!(buf.red(2, 0) > 160);
    }

    #[test]
    fn test_contrast_pole_rejected() {
        let mut buf = PixelBuffer::from_gray(1, 1, &[90]).unwrap();
        let err = adjust_contrast(&mut buf, 259).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidParameter {
                name: "contrast_amount",
                ..
            }
        ));
        assert_eq!(buf.red(0, 0), 90, "buffer must be untouched on error");
    }
}
