#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// per-cell affine approximation of the reprojection.
pub mod affine;

/// utilities for resampling filters and source-pixel sampling.
pub mod interpolation;

/// reprojection mesh construction.
pub mod mesh;

/// cartographic projection transforms.
pub mod proj;

/// binary scanline polygon rasterization.
pub mod scanline;

/// pixel space to geographic space view transforms.
pub mod transform;

/// the mesh warp algorithm and its pixel format dispatch.
pub mod warp;
