//! RGBA8 pixel buffer.

use crate::api::EngineError;

/// Opaque white, the background colour of every binarized image.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Opaque black, the foreground colour of every binarized image.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// An owned RGBA8 image.
///
/// Samples are stored row-major, four bytes per pixel in `R, G, B, A` order.
/// The sample vector always holds exactly `width * height * 4` bytes; every
/// constructor enforces this, so operators index without re-checking.
///
/// Non-colour operators (morphology, labeling, edges, thinning) treat the red
/// channel as the scalar intensity. They are meant to run after
/// [`to_grayscale`](crate::to_grayscale) or [`binarize`](crate::binarize) has
/// made `R = G = B`.
///
/// # Example
///
/// ```
/// use raster_engine::PixelBuffer;
///
/// let mut buf = PixelBuffer::filled(3, 2, [255, 255, 255, 255]);
/// buf.set_gray(1, 1, 0);
///
/// assert_eq!(buf.pixel(1, 1), [0, 0, 0, 255]);
/// assert_eq!(buf.samples().len(), 3 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap decoded samples, checking that their length matches the dimensions.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, EngineError> {
        let expected = width as usize * height as usize * 4;
        if samples.len() != expected {
            return Err(EngineError::dimensions(
                width,
                height,
                format!(
                    "sample buffer holds {} bytes, expected {}",
                    samples.len(),
                    expected
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut samples = Vec::with_capacity(count * 4);
        for _ in 0..count {
            samples.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            samples,
        }
    }

    /// Build a buffer from per-pixel intensities, one byte per pixel.
    ///
    /// Each intensity is written to R, G and B with opaque alpha.
    pub fn from_gray(width: u32, height: u32, gray: &[u8]) -> Result<Self, EngineError> {
        let expected = width as usize * height as usize;
        if gray.len() != expected {
            return Err(EngineError::dimensions(
                width,
                height,
                format!("got {} intensities, expected {}", gray.len(), expected),
            ));
        }
        let samples = gray.iter().flat_map(|&v| [v, v, v, 255]).collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    #[inline]
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Read the four channels of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.samples[i],
            self.samples[i + 1],
            self.samples[i + 2],
            self.samples[i + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.samples[i..i + 4].copy_from_slice(&rgba);
    }

    /// Scalar intensity of the pixel, i.e. its red channel.
    #[inline]
    pub fn red(&self, x: u32, y: u32) -> u8 {
        self.samples[self.offset(x, y)]
    }

    /// Set R, G and B to `value`, leaving alpha untouched.
    #[inline]
    pub fn set_gray(&mut self, x: u32, y: u32, value: u8) {
        let i = self.offset(x, y);
        self.samples[i] = value;
        self.samples[i + 1] = value;
        self.samples[i + 2] = value;
    }

    /// Iterate over the RGBA pixels as mutable 4-byte chunks.
    #[inline]
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.samples.chunks_exact_mut(4)
    }

    /// Iterate over the RGBA pixels as 4-byte chunks.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(4)
    }

    /// Fail unless the image can hold a 2x2 block.
    ///
    /// Neighborhood operators call this before scanning. On a 2x2 image the
    /// interior is empty and they degrade to a copy.
    pub(crate) fn require_neighborhood(&self) -> Result<(), EngineError> {
        if self.width < 2 || self.height < 2 {
            return Err(EngineError::dimensions(
                self.width,
                self.height,
                "neighborhood operators need at least 2x2 pixels",
            ));
        }
        Ok(())
    }
}

/// Round a floating-point channel value and clamp it into `0..=255`.
#[inline]
pub fn quantize(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
