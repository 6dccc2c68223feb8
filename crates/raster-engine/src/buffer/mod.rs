//! Pixel and grid containers shared by every operator.
//!
//! - [`PixelBuffer`]: owned RGBA8 image, the input and output of all
//!   buffer-level operations
//! - [`Grid`]: row-major 2D grid backing label maps and thinning masks

mod grid;
mod pixel_buffer;

pub use grid::Grid;
pub use pixel_buffer::{quantize, PixelBuffer, BLACK, WHITE};
