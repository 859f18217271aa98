/// Axis-aligned geographic rectangle covered by a raster's pixel grid.
///
/// Coordinates are in the units of whatever reference system the raster
/// lives in (degrees, metres, ...). The constructor normalizes the corner
/// order so `min_x <= max_x` and `min_y <= max_y` always hold.
///
/// # Examples
///
/// ```
/// use geowarp_raster::GeoExtent;
///
/// let extent = GeoExtent::new(10.0, 60.0, 0.0, 40.0);
/// assert_eq!(extent.min_x, 0.0);
/// assert_eq!(extent.max_x, 10.0);
/// assert_eq!(extent.width(), 10.0);
/// assert_eq!(extent.height(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoExtent {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl GeoExtent {
    /// Create an extent from two opposite corners, in any order.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// The width of the extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// The height of the extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl std::fmt::Display for GeoExtent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GeoExtent({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
