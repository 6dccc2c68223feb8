//! Rasterlab - binarized image analysis toolkit
//!
//! Command-line front end for the `raster-engine` crate: PNG codec,
//! configuration, geometric transforms and the operation catalogue.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
