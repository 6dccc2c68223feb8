//! Unified error type for the raster-engine public API.
//!
//! [`EngineError`] covers every failure an engine operation can report.
//! Operations are pure and deterministic, so none of these are worth
//! retrying: the same input reproduces the same error.

use crate::buffer::PixelBuffer;
use thiserror::Error;

/// Error returned by engine operations.
///
/// # Example
///
/// ```
/// use raster_engine::{EngineError, PixelBuffer};
///
/// let err = PixelBuffer::new(2, 2, vec![0; 3]).unwrap_err();
/// assert!(matches!(err, EngineError::InvalidDimensions { .. }));
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Buffer shape is inconsistent or too small for the requested operator.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// A caller-supplied parameter is outside its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Thinning hit its configured pass cap before reaching a fixed point.
    ///
    /// `partial` holds the skeleton as it stood after the last completed pass.
    #[error("thinning did not converge within {passes} passes")]
    ConvergenceExceeded { passes: usize, partial: PixelBuffer },
}

impl EngineError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        EngineError::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = EngineError::parameter("threshold", "must be within 0..=255, got 300");
        assert_eq!(
            err.to_string(),
            "invalid parameter `threshold`: must be within 0..=255, got 300"
        );
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = EngineError::dimensions(1, 5, "3x3 neighborhood needs at least 2x2");
        assert_eq!(
            err.to_string(),
            "invalid dimensions 1x5: 3x3 neighborhood needs at least 2x2"
        );
    }

    #[test]
    fn test_convergence_exceeded_message() {
        let err = EngineError::ConvergenceExceeded {
            passes: 4,
            partial: PixelBuffer::filled(2, 2, [255, 255, 255, 255]),
        };
        assert_eq!(err.to_string(), "thinning did not converge within 4 passes");
    }
}
