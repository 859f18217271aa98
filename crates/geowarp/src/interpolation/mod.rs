//! Resampling strategies used when filling warped pixels.
//!
//! [`ScalingMethod::Near`] copies the single nearest source pixel with no
//! blending. The interpolating methods combine a kernel-weighted
//! neighbourhood of source pixels; their footprint can be widened with a
//! filter-support factor, which trades sharpness for aliasing when the warp
//! shrinks the source.

mod filters;
mod sample;

pub use filters::Filter;
pub use sample::{sample_filtered, sample_nearest};

/// Resampling strategy for resolving source pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingMethod {
    /// Nearest neighbour, no blending.
    Near,
    /// Bilinear interpolation over a 2x2 neighbourhood.
    Bilinear,
    /// Catmull-Rom bicubic interpolation over a 4x4 neighbourhood.
    Bicubic,
    /// Lanczos windowed-sinc interpolation (a = 2).
    Lanczos,
}

impl ScalingMethod {
    /// The filter kernel for this method, or `None` for [`ScalingMethod::Near`].
    ///
    /// `filter_factor` scales the kernel support; values `<= 0` fall back
    /// to the native support of 1.0.
    pub fn filter(self, filter_factor: f64) -> Option<Filter> {
        let factor = if filter_factor > 0.0 {
            filter_factor
        } else {
            1.0
        };
        match self {
            ScalingMethod::Near => None,
            ScalingMethod::Bilinear => Some(Filter::bilinear(factor)),
            ScalingMethod::Bicubic => Some(Filter::bicubic(factor)),
            ScalingMethod::Lanczos => Some(Filter::lanczos(factor)),
        }
    }
}
