//! Skeletonization by Zhang-Suen thinning.
//!
//! [`skeletonize`] is the buffer-level entry point: it binarizes the image,
//! thins the dark foreground to a one-pixel-wide skeleton and returns it
//! black on white. [`thinning_grid`] and [`zhang_suen`] expose the two
//! stages separately for callers that already hold a mask.
//!
//! Thinning is the only engine operation whose running time depends on the
//! image content. [`ThinningOptions::max_passes`] bounds it without changing
//! the fixed-point condition for inputs that converge under the cap.

mod options;
mod zhang_suen;

pub use options::ThinningOptions;
pub use zhang_suen::{
    skeletonize, thinning_grid, zhang_suen, ThinningGrid, ThinningOutcome, ThinningStats,
};
