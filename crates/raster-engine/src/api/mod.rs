//! Public API for the raster-engine crate.
//!
//! This module provides the high-level API: [`DominoCounter`] builder and
//! [`EngineError`] unified error type.

mod builder;
mod error;

pub use builder::DominoCounter;
pub use error::EngineError;
