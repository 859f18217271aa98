use crate::raster::Raster;

/// Tag identifying the concrete pixel representation of a [`RasterData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// No pixel data at all.
    Null,
    /// 8-bit RGBA, four interleaved channels.
    Rgba8,
    /// 8-bit grayscale, single channel.
    Gray8,
    /// 16-bit grayscale, single channel.
    Gray16,
    /// 32-bit floating point grayscale, single channel.
    Gray32f,
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            PixelFormat::Null => "null",
            PixelFormat::Rgba8 => "rgba8",
            PixelFormat::Gray8 => "gray8",
            PixelFormat::Gray16 => "gray16",
            PixelFormat::Gray32f => "gray32f",
        };
        write!(f, "{}", name)
    }
}

/// A raster whose concrete pixel representation is only known at runtime.
///
/// The supported representations form a closed set, so operations dispatch
/// with an exhaustive `match` instead of runtime type inspection. The `Null`
/// variant models "no pixel data" (an empty layer, a query that returned
/// nothing) and is a defined no-op for warping.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterData {
    /// No pixel data.
    Null,
    /// 8-bit RGBA pixels.
    Rgba8(Raster<u8, 4>),
    /// 8-bit grayscale pixels.
    Gray8(Raster<u8, 1>),
    /// 16-bit grayscale pixels.
    Gray16(Raster<u16, 1>),
    /// 32-bit floating point grayscale pixels.
    Gray32f(Raster<f32, 1>),
}

impl RasterData {
    /// The format tag of the stored pixel data.
    pub fn format(&self) -> PixelFormat {
        match self {
            RasterData::Null => PixelFormat::Null,
            RasterData::Rgba8(_) => PixelFormat::Rgba8,
            RasterData::Gray8(_) => PixelFormat::Gray8,
            RasterData::Gray16(_) => PixelFormat::Gray16,
            RasterData::Gray32f(_) => PixelFormat::Gray32f,
        }
    }

    /// The width in pixels, zero for [`RasterData::Null`].
    pub fn width(&self) -> usize {
        match self {
            RasterData::Null => 0,
            RasterData::Rgba8(r) => r.width(),
            RasterData::Gray8(r) => r.width(),
            RasterData::Gray16(r) => r.width(),
            RasterData::Gray32f(r) => r.width(),
        }
    }

    /// The height in pixels, zero for [`RasterData::Null`].
    pub fn height(&self) -> usize {
        match self {
            RasterData::Null => 0,
            RasterData::Rgba8(r) => r.height(),
            RasterData::Gray8(r) => r.height(),
            RasterData::Gray16(r) => r.height(),
            RasterData::Gray32f(r) => r.height(),
        }
    }

    /// Whether this raster holds no pixel data.
    pub fn is_null(&self) -> bool {
        matches!(self, RasterData::Null)
    }
}

impl From<Raster<u8, 4>> for RasterData {
    fn from(raster: Raster<u8, 4>) -> Self {
        RasterData::Rgba8(raster)
    }
}

impl From<Raster<u8, 1>> for RasterData {
    fn from(raster: Raster<u8, 1>) -> Self {
        RasterData::Gray8(raster)
    }
}

impl From<Raster<u16, 1>> for RasterData {
    fn from(raster: Raster<u16, 1>) -> Self {
        RasterData::Gray16(raster)
    }
}

impl From<Raster<f32, 1>> for RasterData {
    fn from(raster: Raster<f32, 1>) -> Self {
        RasterData::Gray32f(raster)
    }
}
