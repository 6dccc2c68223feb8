#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! raster-engine: pixel-buffer algorithms for binarized image analysis
//!
//! This library implements the computational core of a small image toolkit:
//! colour conversion, 3x3 neighborhood filters, morphology, connected-component
//! labeling, Zhang-Suen thinning and a domino pip counter built on top of them.
//! It does no file I/O; callers hand it decoded RGBA8 pixels.
//!
//! # Quick Start
//!
//! ```
//! use raster_engine::{binarize, label_components, to_grayscale, PixelBuffer};
//!
//! let mut buf = PixelBuffer::filled(8, 8, [255, 255, 255, 255]);
//! buf.set_pixel(2, 2, [30, 30, 30, 255]);
//! buf.set_pixel(3, 2, [30, 30, 30, 255]);
//! buf.set_pixel(6, 6, [10, 10, 10, 255]);
//!
//! to_grayscale(&mut buf);
//! binarize(&mut buf, 128);
//!
//! let labeling = label_components(&buf);
//! assert_eq!(labeling.count, 2);
//! ```
//!
//! # Domino Pips
//!
//! [`DominoCounter`] runs the full pip-counting pipeline:
//!
//! ```
//! use raster_engine::{DominoCounter, PixelBuffer};
//!
//! let tile = PixelBuffer::filled(24, 24, [255, 255, 255, 255]);
//! let result = DominoCounter::new().count(&tile).unwrap();
//! assert_eq!(result.total(), 0);
//! ```
//!
//! # Conventions
//!
//! These hold for every operator in the crate and are what the tests in
//! `domain_tests` pin down:
//!
//! | Convention | Meaning |
//! |------------|---------|
//! | Foreground | black (`0`) pixels of a binarized image |
//! | Scalar channel | non-colour operators read the red sample only |
//! | Snapshot reads | neighborhood operators read the input and write a fresh buffer |
//! | Border ring | pixels without a full neighborhood are copied unchanged |
//! | Alpha | never modified by any operator |
//! | Quantization | floating-point results round to nearest, then clamp to `0..=255` |
//!
//! Snapshot reads matter most for morphology: an in-place erosion would let a
//! freshly darkened pixel darken its right and lower neighbours in the same
//! pass and smear objects across the image.
//!
//! ## Thinning
//!
//! [`skeletonize`] runs Zhang-Suen to a fixed point. Each sub-iteration first
//! collects every deletable pixel, then clears them together. An optional
//! pass cap ([`ThinningOptions::max_passes`]) turns a runaway loop into
//! [`EngineError::ConvergenceExceeded`] carrying the partial skeleton.
//!
//! ```
//! use raster_engine::{skeletonize, PixelBuffer, ThinningOptions};
//!
//! let mut buf = PixelBuffer::filled(7, 5, [255, 255, 255, 255]);
//! for x in 1..6 {
//!     buf.set_gray(x, 2, 0);
//! }
//!
//! let outcome = skeletonize(&buf, &ThinningOptions::default()).unwrap();
//! assert_eq!(outcome.buffer, buf);
//! ```

pub mod api;
pub mod buffer;
pub mod color;
pub mod domino;
pub mod filter;
pub mod morph;
pub mod segment;
pub mod thin;


pub use api::{DominoCounter, EngineError};
pub use buffer::{quantize, Grid, PixelBuffer, BLACK, WHITE};
pub use color::{
    adjust_brightness, adjust_contrast, binarize, threshold_from, to_grayscale, DEFAULT_THRESHOLD,
};
pub use domino::{
    analyze, count_pips, split_halves, DominoAnalysis, DominoOptions, DominoResult,
    DEFAULT_DIVIDER_MARGIN, DIVIDER_RESIDUE_CORRECTION,
};
pub use filter::{convolve3x3, roberts_edges, Kernel3x3, BOX, IDENTITY};
pub use morph::{closing, dilate, erode, opening, StructuringElement, StructuringElementKind};
pub use segment::{
    component_areas, filter_by_area, label_components, min_area_from, AreaFilterResult,
    ComponentAreaTable, LabelMap, Labeling, DEFAULT_MIN_AREA,
};
pub use thin::{
    skeletonize, thinning_grid, zhang_suen, ThinningGrid, ThinningOptions, ThinningOutcome,
    ThinningStats,
};
