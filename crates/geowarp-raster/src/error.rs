/// An error type for the raster module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RasterError {
    /// Error when the pixel buffer length does not match the raster shape.
    #[error("data length ({0}) does not match the raster size ({1})")]
    InvalidBufferLength(usize, usize),

    /// Error when a value cannot be represented in the requested scalar type.
    #[error("failed to cast pixel value")]
    CastError,
}
