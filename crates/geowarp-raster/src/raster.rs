use crate::error::RasterError;

/// Raster size in pixels
///
/// A struct to represent the size of a raster in pixels.
///
/// # Examples
///
/// ```
/// use geowarp_raster::RasterSize;
///
/// let size = RasterSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterSize {
    /// Width of the raster in pixels
    pub width: usize,
    /// Height of the raster in pixels
    pub height: usize,
}

impl std::fmt::Display for RasterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "RasterSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for RasterSize {
    fn from(size: [usize; 2]) -> Self {
        RasterSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for the scalar types a raster sample can hold.
///
/// The closed set of supported scalars is `u8`, `u16` and `f32`. The f32
/// round trip is used by the interpolating resampling filters; nearest
/// neighbour resampling copies scalar values verbatim and never converts.
pub trait PixelScalar: Copy + Default + Send + Sync + 'static {
    /// Convert the sample to f32 for filter arithmetic.
    fn to_f32(self) -> f32;

    /// Convert an f32 filter result back to the scalar type, clamping to the
    /// representable range.
    fn from_f32(x: f32) -> Self;
}

impl PixelScalar for u8 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

impl PixelScalar for u16 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 65535.0) as u16
    }
}

impl PixelScalar for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(x: f32) -> Self {
        x
    }
}

/// A raster of pixels with a fixed scalar type and channel count.
///
/// Pixels are stored row-major in a contiguous buffer with interleaved
/// channels, so the sample at `(x, y, c)` lives at `(y * width + x) * C + c`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T, const C: usize> {
    size: RasterSize,
    data: Vec<T>,
}

impl<T, const C: usize> Raster<T, C>
where
    T: PixelScalar,
{
    /// Create a new raster from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `data` - The pixel data of the raster.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the raster shape, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use geowarp_raster::{Raster, RasterSize};
    ///
    /// let raster = Raster::<u8, 4>::new(
    ///     RasterSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(raster.width(), 10);
    /// assert_eq!(raster.height(), 20);
    /// assert_eq!(raster.num_channels(), 4);
    /// ```
    pub fn new(size: RasterSize, data: Vec<T>) -> Result<Self, RasterError> {
        if data.len() != size.width * size.height * C {
            return Err(RasterError::InvalidBufferLength(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new raster with the given size, filled with a constant value.
    pub fn from_size_val(size: RasterSize, val: T) -> Self {
        Self {
            size,
            data: vec![val; size.width * size.height * C],
        }
    }

    /// Cast the pixel data of the raster to a different scalar type.
    pub fn cast<U>(&self) -> Result<Raster<U, C>, RasterError>
    where
        U: num_traits::NumCast + PixelScalar,
        T: num_traits::NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(RasterError::CastError))
            .collect::<Result<Vec<U>, RasterError>>()?;

        Raster::new(self.size, casted_data)
    }

    /// The size of the raster in pixels.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// The width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of interleaved channels per pixel.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// The pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The channel values of the pixel at `(x, y)`, or `None` when out of
    /// bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let base = (y * self.size.width + x) * C;
        Some(&self.data[base..base + C])
    }
}
