//! Neighborhood filters: 3x3 convolution and Roberts cross edges.
//!
//! Both read from a frozen input and write a fresh output buffer of the
//! same dimensions. Pixels without a complete neighborhood are copied
//! through unchanged.

mod convolve;
mod kernel;
mod roberts;

pub use convolve::convolve3x3;
pub use kernel::{Kernel3x3, BOX, IDENTITY};
pub use roberts::roberts_edges;
