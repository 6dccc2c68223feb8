//! Grayscale morphology over the red channel.
//!
//! [`erode`] takes the neighborhood minimum and [`dilate`] the maximum, over
//! the offsets of a [`StructuringElement`]. [`opening`] and [`closing`] chain
//! two independent passes. Each pass reads a frozen input and writes a fresh
//! buffer.
//!
//! With black foreground, erosion grows objects and dilation shrinks them.
//! So `opening` fills white specks inside dark shapes, and `closing` drops
//! dark specks from a white background.

mod ops;
mod structuring;

pub use ops::{closing, dilate, erode, opening};
pub use structuring::{StructuringElement, StructuringElementKind};
