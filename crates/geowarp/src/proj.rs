use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Conversion between the source raster's reference system and the target
/// map's reference system.
///
/// Both directions operate batched and in place over coordinate slices; a
/// single call converts a whole mesh plane, which is where the mesh approach
/// recovers its cost over per-pixel evaluation. Implementations must never
/// panic on unprojectable input: a point with no image in the other system
/// is marked by writing non-finite coordinates (NaN), and the warp skips the
/// mesh cells it touches.
pub trait ProjTransform: Send + Sync {
    /// Convert coordinates from the source system to the target system, in
    /// place.
    fn source_to_target(&self, xs: &mut [f64], ys: &mut [f64]);

    /// Convert coordinates from the target system to the source system, in
    /// place.
    fn target_to_source(&self, xs: &mut [f64], ys: &mut [f64]);
}

/// The trivial projection between two identical reference systems.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityProjection;

impl ProjTransform for IdentityProjection {
    fn source_to_target(&self, _xs: &mut [f64], _ys: &mut [f64]) {}

    fn target_to_source(&self, _xs: &mut [f64], _ys: &mut [f64]) {}
}

/// Spherical Mercator radius, metres.
const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitudes beyond this band project to unbounded y; inputs are clamped.
const MAX_LATITUDE: f64 = 85.06;

/// Projection between geographic lon/lat degrees (source) and spherical
/// ("web") Mercator metres (target).
///
/// Latitudes are clamped to the Mercator valid band before projecting, so
/// every finite input has a finite image.
///
/// # Examples
///
/// ```
/// use geowarp::proj::{ProjTransform, WebMercator};
///
/// let mut xs = [180.0];
/// let mut ys = [0.0];
/// WebMercator.source_to_target(&mut xs, &mut ys);
/// assert!((xs[0] - 20_037_508.34).abs() < 1.0);
/// assert!(ys[0].abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WebMercator;

impl ProjTransform for WebMercator {
    fn source_to_target(&self, xs: &mut [f64], ys: &mut [f64]) {
        for (x, y) in xs.iter_mut().zip(ys.iter_mut()) {
            let lat = y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
            *x = x.to_radians() * EARTH_RADIUS;
            *y = (FRAC_PI_4 + lat / 2.0).tan().ln() * EARTH_RADIUS;
        }
    }

    fn target_to_source(&self, xs: &mut [f64], ys: &mut [f64]) {
        for (x, y) in xs.iter_mut().zip(ys.iter_mut()) {
            *x = (*x / EARTH_RADIUS).to_degrees();
            *y = (2.0 * (*y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
        }
    }
}
