//! Domino pipeline options and tuning constants.

use crate::color::DEFAULT_THRESHOLD;
use crate::morph::StructuringElement;
use crate::segment::DEFAULT_MIN_AREA;

/// Rows on each side of the divider excluded from both halves.
pub const DEFAULT_DIVIDER_MARGIN: u32 = 3;

/// Components subtracted from the bottom-half count.
///
/// The bottom half of a typical tile photo keeps one stray component from
/// the divider bar that survives the margin and the area filter. This is an
/// empirical correction and is applied as-is; it is not derived from the
/// image and can undercount tiles without that residue.
pub const DIVIDER_RESIDUE_CORRECTION: u32 = 1;

/// Configuration for the domino pip-counting pipeline.
///
/// # Defaults
///
/// - Threshold: 128
/// - Structuring element: 3x3 square (noise-cleanup opening)
/// - Minimum pip area: 20 pixels
/// - Divider margin: 3 rows
///
/// # Example
///
/// ```
/// use raster_engine::DominoOptions;
///
/// let options = DominoOptions::new().min_area(12).divider_margin(5);
/// assert_eq!(options.min_area, 12);
/// assert_eq!(options.threshold, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominoOptions {
    /// Binarization threshold; darker pixels are candidate pips.
    pub threshold: u8,

    /// Element for the opening that cleans binarization noise.
    pub structuring_element: StructuringElement,

    /// Components smaller than this many pixels are not pips.
    pub min_area: u32,

    /// Half-height of the band around the divider row excluded from counting.
    pub divider_margin: u32,
}

impl Default for DominoOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            structuring_element: StructuringElement::square(),
            min_area: DEFAULT_MIN_AREA,
            divider_margin: DEFAULT_DIVIDER_MARGIN,
        }
    }
}

impl DominoOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn structuring_element(mut self, se: StructuringElement) -> Self {
        self.structuring_element = se;
        self
    }

    #[inline]
    pub fn min_area(mut self, min_area: u32) -> Self {
        self.min_area = min_area;
        self
    }

    #[inline]
    pub fn divider_margin(mut self, margin: u32) -> Self {
        self.divider_margin = margin;
        self
    }
}
