//! DominoCounter builder -- the ergonomic entry point for pip counting.
//!
//! [`DominoCounter`] wraps [`DominoOptions`] behind fluent configuration and
//! runs the pipeline on any number of tiles.

use crate::api::EngineError;
use crate::buffer::PixelBuffer;
use crate::domino::{analyze, DominoAnalysis, DominoOptions, DominoResult};
use crate::morph::StructuringElement;

/// High-level pip counter for domino tile images.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`count()`](Self::count) takes `&self`, so one counter serves many tiles
/// - [`analyze()`](Self::analyze) returns the intermediate stages as well
///
/// # Example
///
/// ```
/// use raster_engine::{DominoCounter, PixelBuffer};
///
/// let counter = DominoCounter::new().min_area(10).divider_margin(2);
///
/// let tile = PixelBuffer::filled(16, 16, [255, 255, 255, 255]);
/// let result = counter.count(&tile).unwrap();
///
/// assert_eq!(result.top_pips, 0);
/// assert_eq!(result.bottom_pips, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DominoCounter {
    options: DominoOptions,
}

impl DominoCounter {
    /// Create a counter with [`DominoOptions::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter from pre-built options.
    pub fn with_options(options: DominoOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.options = self.options.threshold(threshold);
        self
    }

    #[inline]
    pub fn structuring_element(mut self, se: StructuringElement) -> Self {
        self.options = self.options.structuring_element(se);
        self
    }

    #[inline]
    pub fn min_area(mut self, min_area: u32) -> Self {
        self.options = self.options.min_area(min_area);
        self
    }

    #[inline]
    pub fn divider_margin(mut self, margin: u32) -> Self {
        self.options = self.options.divider_margin(margin);
        self
    }

    /// The options this counter runs with.
    pub fn options(&self) -> &DominoOptions {
        &self.options
    }

    /// Count pips on one tile.
    pub fn count(&self, tile: &PixelBuffer) -> Result<DominoResult, EngineError> {
        self.analyze(tile).map(|analysis| analysis.result)
    }

    /// Count pips and keep the cleaned image and per-half label maps.
    pub fn analyze(&self, tile: &PixelBuffer) -> Result<DominoAnalysis, EngineError> {
        analyze(tile, &self.options)
    }
}
