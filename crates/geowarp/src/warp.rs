use rayon::prelude::*;

use geowarp_raster::{GeoExtent, PixelFormat, PixelScalar, Raster, RasterData};

use crate::affine::Affine2;
use crate::interpolation::{sample_filtered, sample_nearest, ScalingMethod};
use crate::mesh::Mesh;
use crate::proj::ProjTransform;
use crate::scanline;
use crate::transform::ViewTransform;

/// Errors that can occur when warping a raster.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum WarpError {
    /// Source and target rasters hold different pixel representations.
    #[error("pixel format mismatch: source is {source_format}, target is {target_format}")]
    FormatMismatch {
        /// Format of the source raster.
        source_format: PixelFormat,
        /// Format of the target raster.
        target_format: PixelFormat,
    },

    /// The mesh cell size must be at least one pixel.
    #[error("mesh cell size must be greater than zero")]
    InvalidMeshSize,
}

/// Observable outcome of one warp invocation.
///
/// Cells the projection collapses or cannot map are skipped rather than
/// failing the whole warp; the counts make that degradation visible to
/// callers and tests instead of silently leaving holes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarpStats {
    /// Total number of mesh cells processed.
    pub cells: usize,
    /// Cells skipped because of a degenerate or unprojectable geometry.
    pub skipped_cells: usize,
}

/// Reproject and resample a source raster into a target raster through a
/// coarse mesh.
///
/// Both rasters must share the scalar type and channel count; format
/// selection over runtime-tagged rasters happens in [`warp`]. The source
/// covers `source_extent` in its own reference system, the target covers
/// `target_extent` in the target system, and `offset` shifts the target
/// pixel origin (used when the target buffer is a tile of a larger
/// surface). The projection is evaluated only at mesh vertices, in one
/// batched call; inside each cell the mapping is approximated by an affine
/// fit of its four corners, so smaller `mesh_cell_size` trades speed for
/// accuracy.
///
/// Pixels in skipped cells, or outside every cell, keep their prior value.
#[allow(clippy::too_many_arguments)]
pub fn warp_raster<T, const C: usize, P>(
    target: &mut Raster<T, C>,
    source: &Raster<T, C>,
    proj: &P,
    target_extent: &GeoExtent,
    source_extent: &GeoExtent,
    offset: (f64, f64),
    mesh_cell_size: usize,
    method: ScalingMethod,
    filter_factor: f64,
) -> Result<WarpStats, WarpError>
where
    T: PixelScalar,
    P: ProjTransform + ?Sized,
{
    if mesh_cell_size == 0 {
        return Err(WarpError::InvalidMeshSize);
    }

    let mut stats = WarpStats::default();
    if source.width() == 0 || source.height() == 0 || target.width() == 0 || target.height() == 0 {
        return Ok(stats);
    }

    let source_view = ViewTransform::new(source.width(), source.height(), source_extent);
    let target_view = ViewTransform::with_offset(
        target.width(),
        target.height(),
        target_extent,
        offset.0,
        offset.1,
    );

    let mesh = Mesh::build(source.size(), mesh_cell_size, &source_view, proj);
    let filter = method.filter(filter_factor);

    let (tw, th) = (target.width(), target.height());
    let out = target.as_slice_mut();

    for j in 0..mesh.cells_y() {
        for i in 0..mesh.cells_x() {
            stats.cells += 1;

            // the per-cell (not per-pixel) transform into target pixels
            let mut quad = [(0.0f64, 0.0f64); 4];
            let mut projectable = true;
            for (corner, (gx, gy)) in quad.iter_mut().zip(mesh.cell_corners(i, j)) {
                let (px, py) = target_view.forward(gx, gy);
                if !px.is_finite() || !py.is_finite() {
                    projectable = false;
                    break;
                }
                *corner = (px.floor(), py.floor());
            }
            if !projectable {
                stats.skipped_cells += 1;
                continue;
            }

            let (x0, y0, x1, y1) = mesh.cell_source_rect(i, j);
            let inverse = match Affine2::fit_quad(x0, y0, x1, y1, &quad).invert() {
                Some(inverse) => inverse,
                None => {
                    stats.skipped_cells += 1;
                    continue;
                }
            };

            match &filter {
                None => scanline::fill_polygon(&quad, tw, th, |y, x_start, x_end| {
                    for x in x_start..x_end {
                        let (u, v) = inverse.apply(x as f64 + 0.5, y as f64 + 0.5);
                        let pixel = sample_nearest(source, u, v);
                        let base = (y * tw + x) * C;
                        out[base..base + C].copy_from_slice(&pixel);
                    }
                }),
                Some(filter) => scanline::fill_polygon(&quad, tw, th, |y, x_start, x_end| {
                    for x in x_start..x_end {
                        let (u, v) = inverse.apply(x as f64 + 0.5, y as f64 + 0.5);
                        let pixel = sample_filtered(source, u, v, filter);
                        let base = (y * tw + x) * C;
                        out[base..base + C].copy_from_slice(&pixel);
                    }
                }),
            }
        }
    }

    if stats.skipped_cells > 0 {
        log::debug!(
            "warp skipped {} of {} mesh cells (degenerate or unprojectable)",
            stats.skipped_cells,
            stats.cells
        );
    }

    Ok(stats)
}

/// Reproject and resample between runtime-tagged rasters.
///
/// Dispatches [`warp_raster`] over the closed set of supported pixel
/// formats. A [`RasterData::Null`] source is a defined no-op; mismatched
/// source and target formats are an error (the target is left untouched).
///
/// # Examples
///
/// ```
/// use geowarp::interpolation::ScalingMethod;
/// use geowarp::proj::IdentityProjection;
/// use geowarp::warp::warp;
/// use geowarp_raster::{GeoExtent, Raster, RasterData, RasterSize};
///
/// let size = RasterSize { width: 4, height: 4 };
/// let extent = GeoExtent::new(0.0, 0.0, 4.0, 4.0);
/// let source = RasterData::from(Raster::<u8, 1>::from_size_val(size, 7));
/// let mut target = RasterData::from(Raster::<u8, 1>::from_size_val(size, 0));
///
/// let stats = warp(
///     &mut target,
///     &source,
///     &IdentityProjection,
///     &extent,
///     &extent,
///     (0.0, 0.0),
///     2,
///     ScalingMethod::Near,
///     1.0,
/// ).unwrap();
///
/// assert_eq!(stats.skipped_cells, 0);
/// match target {
///     RasterData::Gray8(raster) => assert!(raster.as_slice().iter().all(|&v| v == 7)),
///     _ => unreachable!(),
/// }
/// ```
#[allow(clippy::too_many_arguments)]
pub fn warp<P>(
    target: &mut RasterData,
    source: &RasterData,
    proj: &P,
    target_extent: &GeoExtent,
    source_extent: &GeoExtent,
    offset: (f64, f64),
    mesh_cell_size: usize,
    method: ScalingMethod,
    filter_factor: f64,
) -> Result<WarpStats, WarpError>
where
    P: ProjTransform + ?Sized,
{
    match (target, source) {
        // nothing to warp
        (_, RasterData::Null) => Ok(WarpStats::default()),
        (RasterData::Rgba8(t), RasterData::Rgba8(s)) => warp_raster(
            t,
            s,
            proj,
            target_extent,
            source_extent,
            offset,
            mesh_cell_size,
            method,
            filter_factor,
        ),
        (RasterData::Gray8(t), RasterData::Gray8(s)) => warp_raster(
            t,
            s,
            proj,
            target_extent,
            source_extent,
            offset,
            mesh_cell_size,
            method,
            filter_factor,
        ),
        (RasterData::Gray16(t), RasterData::Gray16(s)) => warp_raster(
            t,
            s,
            proj,
            target_extent,
            source_extent,
            offset,
            mesh_cell_size,
            method,
            filter_factor,
        ),
        (RasterData::Gray32f(t), RasterData::Gray32f(s)) => warp_raster(
            t,
            s,
            proj,
            target_extent,
            source_extent,
            offset,
            mesh_cell_size,
            method,
            filter_factor,
        ),
        (target, source) => Err(WarpError::FormatMismatch {
            source_format: source.format(),
            target_format: target.format(),
        }),
    }
}

/// Reproject and resample by evaluating the projection at every target
/// pixel.
///
/// This is the mapping [`warp_raster`] approximates, at per-pixel
/// projection cost. It exists as the accuracy reference for mesh
/// refinement and for benchmarking the mesh speedup. Rows are processed in
/// parallel; the projection is still called batched, once per row. Target
/// pixels whose source coordinate falls outside the source raster, or
/// cannot be projected at all, keep their prior value.
#[allow(clippy::too_many_arguments)]
pub fn warp_raster_exact<T, const C: usize, P>(
    target: &mut Raster<T, C>,
    source: &Raster<T, C>,
    proj: &P,
    target_extent: &GeoExtent,
    source_extent: &GeoExtent,
    offset: (f64, f64),
    method: ScalingMethod,
    filter_factor: f64,
) where
    T: PixelScalar,
    P: ProjTransform + ?Sized,
{
    if source.width() == 0 || source.height() == 0 || target.width() == 0 || target.height() == 0 {
        return;
    }

    let source_view = ViewTransform::new(source.width(), source.height(), source_extent);
    let target_view = ViewTransform::with_offset(
        target.width(),
        target.height(),
        target_extent,
        offset.0,
        offset.1,
    );

    let filter = method.filter(filter_factor);
    let (sw, sh) = (source.width() as f64, source.height() as f64);
    let tw = target.width();

    target
        .as_slice_mut()
        .par_chunks_exact_mut(C * tw)
        .enumerate()
        .for_each(|(y, row)| {
            let mut xs: Vec<f64> = Vec::with_capacity(tw);
            let mut ys: Vec<f64> = Vec::with_capacity(tw);
            for x in 0..tw {
                let (gx, gy) = target_view.backward(x as f64 + 0.5, y as f64 + 0.5);
                xs.push(gx);
                ys.push(gy);
            }
            proj.target_to_source(&mut xs, &mut ys);

            for (x, pixel) in row.chunks_exact_mut(C).enumerate() {
                let (gx, gy) = (xs[x], ys[x]);
                if !gx.is_finite() || !gy.is_finite() {
                    continue;
                }
                let (u, v) = source_view.forward(gx, gy);
                if u < 0.0 || u >= sw || v < 0.0 || v >= sh {
                    continue;
                }
                let value = match &filter {
                    None => sample_nearest(source, u, v),
                    Some(filter) => sample_filtered(source, u, v, filter),
                };
                pixel.copy_from_slice(&value);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::{IdentityProjection, WebMercator};
    use geowarp_raster::RasterSize;
    use rand::Rng;

    /// Pixel-aligned extent: geographic coordinates equal pixel coordinates
    /// (up to the y flip).
    fn pixel_extent(w: usize, h: usize) -> GeoExtent {
        GeoExtent::new(0.0, 0.0, w as f64, h as f64)
    }

    fn random_gray8(w: usize, h: usize) -> Raster<u8, 1> {
        let mut rng = rand::rng();
        let data = (0..w * h).map(|_| rng.random()).collect();
        Raster::new(
            RasterSize {
                width: w,
                height: h,
            },
            data,
        )
        .unwrap()
    }

    fn checkerboard_gray8(w: usize, h: usize, block: usize) -> Raster<u8, 1> {
        let data = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                if (x / block + y / block) % 2 == 0 {
                    0u8
                } else {
                    255u8
                }
            })
            .collect();
        Raster::new(
            RasterSize {
                width: w,
                height: h,
            },
            data,
        )
        .unwrap()
    }

    /// Collapses every projected point onto one location.
    struct CollapseProjection;

    impl ProjTransform for CollapseProjection {
        fn source_to_target(&self, xs: &mut [f64], ys: &mut [f64]) {
            xs.fill(3.0);
            ys.fill(4.0);
        }

        fn target_to_source(&self, _xs: &mut [f64], _ys: &mut [f64]) {}
    }

    /// Marks every point unprojectable.
    struct UnprojectableProjection;

    impl ProjTransform for UnprojectableProjection {
        fn source_to_target(&self, xs: &mut [f64], ys: &mut [f64]) {
            xs.fill(f64::NAN);
            ys.fill(f64::NAN);
        }

        fn target_to_source(&self, xs: &mut [f64], ys: &mut [f64]) {
            xs.fill(f64::NAN);
            ys.fill(f64::NAN);
        }
    }

    /// Collapses the left part of the plane onto the line x = 8.
    struct HalfCollapseProjection;

    impl ProjTransform for HalfCollapseProjection {
        fn source_to_target(&self, xs: &mut [f64], _ys: &mut [f64]) {
            for x in xs.iter_mut() {
                if *x < 16.5 {
                    *x = 8.0;
                }
            }
        }

        fn target_to_source(&self, _xs: &mut [f64], _ys: &mut [f64]) {}
    }

    #[test]
    fn identity_warp_is_exact_at_cell_size_one() -> Result<(), WarpError> {
        let source = random_gray8(16, 16);
        let mut target = Raster::from_size_val(source.size(), 0u8);
        let extent = pixel_extent(16, 16);

        let stats = warp_raster(
            &mut target,
            &source,
            &IdentityProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            1,
            ScalingMethod::Near,
            1.0,
        )?;

        assert_eq!(stats.cells, 256);
        assert_eq!(stats.skipped_cells, 0);
        assert_eq!(target.as_slice(), source.as_slice());
        Ok(())
    }

    #[test]
    fn identity_warp_is_exact_for_any_cell_size() -> Result<(), WarpError> {
        let source = random_gray8(16, 16);
        let extent = pixel_extent(16, 16);

        // cell sizes that divide the raster, overshoot it, and straddle it
        for cell_size in [2, 4, 5, 16, 32] {
            let mut target = Raster::from_size_val(source.size(), 0u8);
            warp_raster(
                &mut target,
                &source,
                &IdentityProjection,
                &extent,
                &extent,
                (0.0, 0.0),
                cell_size,
                ScalingMethod::Near,
                1.0,
            )?;
            assert_eq!(target.as_slice(), source.as_slice(), "cell {}", cell_size);
        }
        Ok(())
    }

    #[test]
    fn identity_warp_bilinear_is_exact_on_the_grid() -> Result<(), WarpError> {
        let source = checkerboard_gray8(16, 16, 4);
        let mut target = Raster::from_size_val(source.size(), 0u8);
        let extent = pixel_extent(16, 16);

        warp_raster(
            &mut target,
            &source,
            &IdentityProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            8,
            ScalingMethod::Bilinear,
            1.0,
        )?;

        assert_eq!(target.as_slice(), source.as_slice());
        Ok(())
    }

    #[test]
    fn nearest_never_blends() -> Result<(), WarpError> {
        let source = checkerboard_gray8(64, 64, 8);
        let source_extent = GeoExtent::new(0.0, 40.0, 20.0, 60.0);

        // mercator image of the source extent
        let mut xs = [source_extent.min_x, source_extent.max_x];
        let mut ys = [source_extent.min_y, source_extent.max_y];
        WebMercator.source_to_target(&mut xs, &mut ys);
        let target_extent = GeoExtent::new(xs[0], ys[0], xs[1], ys[1]);

        let mut target = Raster::from_size_val(source.size(), 0u8);
        warp_raster(
            &mut target,
            &source,
            &WebMercator,
            &target_extent,
            &source_extent,
            (0.0, 0.0),
            16,
            ScalingMethod::Near,
            1.0,
        )?;

        // binary coverage and no color blending: only source values appear
        assert!(target.as_slice().iter().all(|&v| v == 0 || v == 255));
        assert!(target.as_slice().contains(&255));
        Ok(())
    }

    #[test]
    fn mesh_refinement_converges_to_the_exact_warp() {
        let size = RasterSize {
            width: 64,
            height: 64,
        };
        let data = (0..64 * 64)
            .map(|i| {
                let (x, y) = ((i % 64) as f32, (i / 64) as f32);
                (0.15 * x).sin() + (0.1 * y).cos()
            })
            .collect();
        let source = Raster::<f32, 1>::new(size, data).unwrap();
        let source_extent = GeoExtent::new(0.0, 40.0, 20.0, 60.0);

        let mut xs = [source_extent.min_x, source_extent.max_x];
        let mut ys = [source_extent.min_y, source_extent.max_y];
        WebMercator.source_to_target(&mut xs, &mut ys);
        let target_extent = GeoExtent::new(xs[0], ys[0], xs[1], ys[1]);

        let mut exact = Raster::from_size_val(size, 0.0f32);
        warp_raster_exact(
            &mut exact,
            &source,
            &WebMercator,
            &target_extent,
            &source_extent,
            (0.0, 0.0),
            ScalingMethod::Bilinear,
            1.0,
        );

        let rms: Vec<f64> = [64usize, 16, 2]
            .iter()
            .map(|&cell_size| {
                let mut target = Raster::from_size_val(size, 0.0f32);
                warp_raster(
                    &mut target,
                    &source,
                    &WebMercator,
                    &target_extent,
                    &source_extent,
                    (0.0, 0.0),
                    cell_size,
                    ScalingMethod::Bilinear,
                    1.0,
                )
                .unwrap();

                let sum: f64 = target
                    .as_slice()
                    .iter()
                    .zip(exact.as_slice())
                    .map(|(&a, &b)| ((a - b) as f64).powi(2))
                    .sum();
                (sum / (64.0 * 64.0)).sqrt()
            })
            .collect();

        // refining the mesh must not make the approximation worse
        assert!(rms[1] <= rms[0] + 1e-3, "rms: {:?}", rms);
        assert!(rms[2] <= rms[1] + 1e-3, "rms: {:?}", rms);
        // and over the strongly non-linear band it must actually improve
        assert!(rms[2] < rms[0], "rms: {:?}", rms);
    }

    #[test]
    fn format_mismatch_is_an_error_and_leaves_the_target() {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let extent = pixel_extent(4, 4);
        let source = RasterData::from(Raster::<u8, 4>::from_size_val(size, 9));
        let mut target = RasterData::from(Raster::<u8, 1>::from_size_val(size, 1));
        let before = target.clone();

        let result = warp(
            &mut target,
            &source,
            &IdentityProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            2,
            ScalingMethod::Near,
            1.0,
        );

        assert_eq!(
            result,
            Err(WarpError::FormatMismatch {
                source_format: PixelFormat::Rgba8,
                target_format: PixelFormat::Gray8,
            })
        );
        assert_eq!(target, before);
    }

    #[test]
    fn null_source_is_a_noop() {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let extent = pixel_extent(4, 4);
        let mut target = RasterData::from(Raster::<u8, 1>::from_size_val(size, 1));
        let before = target.clone();

        let stats = warp(
            &mut target,
            &RasterData::Null,
            &IdentityProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            2,
            ScalingMethod::Near,
            1.0,
        )
        .unwrap();

        assert_eq!(stats, WarpStats::default());
        assert_eq!(target, before);
    }

    #[test]
    fn zero_mesh_cell_size_is_an_error() {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let extent = pixel_extent(4, 4);
        let source = Raster::<u8, 1>::from_size_val(size, 9);
        let mut target = Raster::from_size_val(size, 0u8);

        let result = warp_raster(
            &mut target,
            &source,
            &IdentityProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            0,
            ScalingMethod::Near,
            1.0,
        );
        assert_eq!(result, Err(WarpError::InvalidMeshSize));
    }

    #[test]
    fn collapsed_cells_are_skipped_and_leave_the_target() -> Result<(), WarpError> {
        let size = RasterSize {
            width: 32,
            height: 32,
        };
        let source = Raster::<u8, 1>::from_size_val(size, 255);
        let mut target = Raster::from_size_val(size, 0u8);
        let extent = pixel_extent(32, 32);

        let stats = warp_raster(
            &mut target,
            &source,
            &CollapseProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            16,
            ScalingMethod::Near,
            1.0,
        )?;

        assert_eq!(stats.cells, 4);
        assert_eq!(stats.skipped_cells, 4);
        assert!(target.as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn unprojectable_vertices_skip_their_cells() -> Result<(), WarpError> {
        let size = RasterSize {
            width: 32,
            height: 32,
        };
        let source = Raster::<u8, 1>::from_size_val(size, 255);
        let mut target = Raster::from_size_val(size, 0u8);
        let extent = pixel_extent(32, 32);

        let stats = warp_raster(
            &mut target,
            &source,
            &UnprojectableProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            16,
            ScalingMethod::Near,
            1.0,
        )?;

        assert_eq!(stats.skipped_cells, stats.cells);
        assert!(target.as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn partially_collapsed_mesh_warps_the_surviving_cells() -> Result<(), WarpError> {
        let size = RasterSize {
            width: 32,
            height: 16,
        };
        let source = Raster::<u8, 1>::from_size_val(size, 255);
        let mut target = Raster::from_size_val(size, 0u8);
        let extent = pixel_extent(32, 16);

        let stats = warp_raster(
            &mut target,
            &source,
            &HalfCollapseProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            16,
            ScalingMethod::Near,
            1.0,
        )?;

        assert_eq!(stats.cells, 2);
        assert_eq!(stats.skipped_cells, 1);

        // the collapsed left cell writes nothing; the surviving right cell
        // rasterizes from x = 8 on
        for y in 0..16 {
            for x in 0..8 {
                assert_eq!(target.get(x, y).unwrap(), &[0]);
            }
        }
        assert!(target.as_slice().contains(&255));
        Ok(())
    }

    #[test]
    fn disjoint_extents_write_nothing() -> Result<(), WarpError> {
        let size = RasterSize {
            width: 16,
            height: 16,
        };
        let source = Raster::<u8, 1>::from_size_val(size, 255);
        let mut target = Raster::from_size_val(size, 0u8);

        let stats = warp_raster(
            &mut target,
            &source,
            &IdentityProjection,
            &GeoExtent::new(1000.0, 1000.0, 1016.0, 1016.0),
            &pixel_extent(16, 16),
            (0.0, 0.0),
            8,
            ScalingMethod::Near,
            1.0,
        )?;

        assert_eq!(stats.skipped_cells, 0);
        assert!(target.as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn offset_shifts_the_written_window() -> Result<(), WarpError> {
        let source = random_gray8(16, 16);
        let mut target = Raster::from_size_val(source.size(), 0u8);
        let extent = pixel_extent(16, 16);

        warp_raster(
            &mut target,
            &source,
            &IdentityProjection,
            &extent,
            &extent,
            (4.0, 0.0),
            8,
            ScalingMethod::Near,
            1.0,
        )?;

        for y in 0..16 {
            for x in 0..16 {
                let expected = if x < 12 {
                    source.get(x + 4, y).unwrap()[0]
                } else {
                    0
                };
                assert_eq!(target.get(x, y).unwrap(), &[expected], "({}, {})", x, y);
            }
        }
        Ok(())
    }

    #[test]
    fn dispatch_covers_every_format() {
        let size = RasterSize {
            width: 8,
            height: 8,
        };
        let extent = pixel_extent(8, 8);

        let pairs = [
            (
                RasterData::from(Raster::<u8, 4>::from_size_val(size, 20)),
                RasterData::from(Raster::<u8, 4>::from_size_val(size, 0)),
            ),
            (
                RasterData::from(Raster::<u8, 1>::from_size_val(size, 20)),
                RasterData::from(Raster::<u8, 1>::from_size_val(size, 0)),
            ),
            (
                RasterData::from(Raster::<u16, 1>::from_size_val(size, 2000)),
                RasterData::from(Raster::<u16, 1>::from_size_val(size, 0)),
            ),
            (
                RasterData::from(Raster::<f32, 1>::from_size_val(size, 0.5)),
                RasterData::from(Raster::<f32, 1>::from_size_val(size, 0.0)),
            ),
        ];

        for (source, mut target) in pairs {
            let stats = warp(
                &mut target,
                &source,
                &IdentityProjection,
                &extent,
                &extent,
                (0.0, 0.0),
                4,
                ScalingMethod::Near,
                1.0,
            )
            .unwrap();
            assert_eq!(stats.skipped_cells, 0);
            assert_eq!(target, source);
        }
    }

    #[test]
    fn exact_warp_identity_matches_the_source() {
        let source = random_gray8(16, 16);
        let mut target = Raster::from_size_val(source.size(), 0u8);
        let extent = pixel_extent(16, 16);

        warp_raster_exact(
            &mut target,
            &source,
            &IdentityProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            ScalingMethod::Near,
            1.0,
        );

        assert_eq!(target.as_slice(), source.as_slice());
    }

    #[test]
    fn exact_warp_skips_unprojectable_pixels() {
        let size = RasterSize {
            width: 8,
            height: 8,
        };
        let source = Raster::<u8, 1>::from_size_val(size, 255);
        let mut target = Raster::from_size_val(size, 7u8);
        let extent = pixel_extent(8, 8);

        warp_raster_exact(
            &mut target,
            &source,
            &UnprojectableProjection,
            &extent,
            &extent,
            (0.0, 0.0),
            ScalingMethod::Near,
            1.0,
        );

        assert!(target.as_slice().iter().all(|&v| v == 7));
    }
}
