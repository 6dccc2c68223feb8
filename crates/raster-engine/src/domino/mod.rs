//! Domino tile pip counting.
//!
//! A fixed, single-pass heuristic pipeline composed from the engine's
//! primitives. It is not a general object classifier: it assumes a tile
//! photographed upright with dark pips on a light face and a divider bar
//! across the middle row.
//!
//! # Pipeline
//!
//! ```text
//! RGBA tile
//!     |
//!     v
//! grayscale -> binarize(threshold) -> opening(structuring element)
//!     |
//!     v
//! split at height/2, blank the +/- margin band in both halves
//!     |                                 |
//!     v                                 v
//! top half                          bottom half
//! label (8-conn) -> min area        label (8-conn) -> min area
//!     |                                 |
//!     v                                 v
//! top_pips                          bottom_pips - residue correction
//! ```

mod options;
mod pipeline;

pub use options::{DominoOptions, DEFAULT_DIVIDER_MARGIN, DIVIDER_RESIDUE_CORRECTION};
pub use pipeline::{analyze, count_pips, split_halves, DominoAnalysis, DominoResult};
