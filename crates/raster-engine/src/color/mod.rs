//! Pointwise colour operations.
//!
//! Everything here rewrites a buffer in place and leaves alpha alone:
//!
//! - [`to_grayscale`]: BT.601 luma, `R = G = B = Y`
//! - [`binarize`]: black below the threshold, white otherwise
//! - [`adjust_brightness`] / [`adjust_contrast`]: channel offset and stretch

mod adjust;
mod grayscale;

pub use adjust::{adjust_brightness, adjust_contrast};
pub use grayscale::{binarize, threshold_from, to_grayscale, DEFAULT_THRESHOLD};
