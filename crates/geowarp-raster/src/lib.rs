#![deny(missing_docs)]
//! Raster containers, pixel formats and geographic extents

/// Raster representation for reprojection and resampling purposes.
pub mod raster;

/// Geographic extents covered by a raster.
pub mod extent;

/// Runtime-tagged rasters over the closed set of supported pixel formats.
pub mod dynamic;

/// Error types for the raster module.
pub mod error;

pub use crate::dynamic::{PixelFormat, RasterData};
pub use crate::error::RasterError;
pub use crate::extent::GeoExtent;
pub use crate::raster::{PixelScalar, Raster, RasterSize};
