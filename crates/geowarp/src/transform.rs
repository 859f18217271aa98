use geowarp_raster::GeoExtent;

/// Bijection between the pixel grid of a raster and the geographic extent it
/// covers.
///
/// Pixel coordinates are continuous: the pixel at index `(x, y)` occupies
/// `[x, x + 1) x [y, y + 1)` with its centre at `(x + 0.5, y + 0.5)`. Row 0
/// maps onto the extent's max-y edge, so the y axis flips between the two
/// spaces. The optional pixel offset shifts the pixel origin, which is how a
/// tile buffer addresses a sub-window of a larger rendering surface.
///
/// # Examples
///
/// ```
/// use geowarp::transform::ViewTransform;
/// use geowarp_raster::GeoExtent;
///
/// let extent = GeoExtent::new(0.0, 0.0, 16.0, 16.0);
/// let view = ViewTransform::new(16, 16, &extent);
///
/// // the top-left pixel corner is the extent's top-left corner
/// assert_eq!(view.backward(0.0, 0.0), (0.0, 16.0));
/// assert_eq!(view.forward(0.0, 16.0), (0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    extent: GeoExtent,
    offset_x: f64,
    offset_y: f64,
    sx: f64,
    sy: f64,
}

impl ViewTransform {
    /// Create a view transform for a raster of the given pixel dimensions
    /// covering `extent`, with no pixel offset.
    ///
    /// The extent must be non-empty in both dimensions.
    pub fn new(width: usize, height: usize, extent: &GeoExtent) -> Self {
        Self::with_offset(width, height, extent, 0.0, 0.0)
    }

    /// Create a view transform whose pixel origin is shifted by
    /// `(offset_x, offset_y)` pixels.
    pub fn with_offset(
        width: usize,
        height: usize,
        extent: &GeoExtent,
        offset_x: f64,
        offset_y: f64,
    ) -> Self {
        Self {
            extent: *extent,
            offset_x,
            offset_y,
            sx: width as f64 / extent.width(),
            sy: height as f64 / extent.height(),
        }
    }

    /// Map geographic coordinates to pixel coordinates.
    pub fn forward(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.extent.min_x) * self.sx - self.offset_x,
            (self.extent.max_y - y) * self.sy - self.offset_y,
        )
    }

    /// Map pixel coordinates to geographic coordinates.
    pub fn backward(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.extent.min_x + (x + self.offset_x) / self.sx,
            self.extent.max_y - (y + self.offset_y) / self.sy,
        )
    }
}
