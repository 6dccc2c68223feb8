//! Thinning options and configuration.

use crate::color::DEFAULT_THRESHOLD;

/// Configuration for [`skeletonize`](crate::skeletonize).
///
/// # Defaults
///
/// - Threshold: 128 (pixels darker than this are foreground)
/// - Pass cap: none (run until a full pass removes nothing)
///
/// # Example
///
/// ```
/// use raster_engine::ThinningOptions;
///
/// let options = ThinningOptions::new().max_passes(50);
/// assert_eq!(options.max_passes, Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinningOptions {
    /// Binarization threshold used to build the foreground mask.
    pub threshold: u8,

    /// Upper bound on full passes (both sub-iterations).
    ///
    /// When set and reached before convergence, thinning stops and reports
    /// [`EngineError::ConvergenceExceeded`](crate::EngineError::ConvergenceExceeded)
    /// carrying the partial skeleton. Convergence on the final allowed pass
    /// still counts as success. A cap of zero is rejected as
    /// [`EngineError::InvalidParameter`](crate::EngineError::InvalidParameter).
    pub max_passes: Option<usize>,
}

impl Default for ThinningOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_passes: None,
        }
    }
}

impl ThinningOptions {
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
    pub fn max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }
}
