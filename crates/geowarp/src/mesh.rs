use geowarp_raster::RasterSize;

use crate::proj::ProjTransform;
use crate::transform::ViewTransform;

/// Coarse grid of reprojected sample points laid over a source raster.
///
/// The mesh approximates the continuous, non-linear reprojection piecewise:
/// only the grid vertices go through the projection (in one batched call),
/// and everything inside a cell is interpolated affinely from its four
/// corners. Construction runs a fixed pipeline of stages:
///
/// 1. vertices on a regular source-pixel grid, the last row and column
///    clamped onto the raster boundary;
/// 2. each vertex through the source view transform into source-geographic
///    space;
/// 3. the whole plane through [`ProjTransform::source_to_target`] into
///    target-geographic space.
///
/// A vertex the projection cannot map comes back non-finite; the warp
/// treats every cell touching such a vertex as degenerate and skips it.
/// The mesh is immutable once built.
#[derive(Clone, Debug)]
pub struct Mesh {
    cols: usize,
    rows: usize,
    cell_size: usize,
    source_width: usize,
    source_height: usize,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Mesh {
    /// Build the reprojection mesh for a source raster.
    ///
    /// # Arguments
    ///
    /// * `source_size` - The source raster dimensions in pixels.
    /// * `cell_size` - The mesh cell size in source pixels, at least 1.
    /// * `source_view` - The view transform of the source raster.
    /// * `proj` - The projection into the target reference system.
    pub fn build<P>(
        source_size: RasterSize,
        cell_size: usize,
        source_view: &ViewTransform,
        proj: &P,
    ) -> Mesh
    where
        P: ProjTransform + ?Sized,
    {
        let (w, h) = (source_size.width, source_size.height);
        let cols = w.div_ceil(cell_size) + 1;
        let rows = h.div_ceil(cell_size) + 1;

        let mut xs = Vec::with_capacity(cols * rows);
        let mut ys = Vec::with_capacity(cols * rows);

        for j in 0..rows {
            for i in 0..cols {
                let px = (i * cell_size).min(w) as f64;
                let py = (j * cell_size).min(h) as f64;
                let (gx, gy) = source_view.backward(px, py);
                xs.push(gx);
                ys.push(gy);
            }
        }

        // the one batched projection call for the whole warp
        proj.source_to_target(&mut xs, &mut ys);

        Mesh {
            cols,
            rows,
            cell_size,
            source_width: w,
            source_height: h,
            xs,
            ys,
        }
    }

    /// Number of vertex columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of vertex rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of mesh cells along x.
    pub fn cells_x(&self) -> usize {
        self.cols - 1
    }

    /// Number of mesh cells along y.
    pub fn cells_y(&self) -> usize {
        self.rows - 1
    }

    /// The target-geographic coordinates of vertex `(i, j)`.
    pub fn vertex(&self, i: usize, j: usize) -> (f64, f64) {
        let idx = j * self.cols + i;
        (self.xs[idx], self.ys[idx])
    }

    /// The four corner vertices of cell `(i, j)` in winding order top-left,
    /// top-right, bottom-right, bottom-left.
    pub fn cell_corners(&self, i: usize, j: usize) -> [(f64, f64); 4] {
        [
            self.vertex(i, j),
            self.vertex(i + 1, j),
            self.vertex(i + 1, j + 1),
            self.vertex(i, j + 1),
        ]
    }

    /// The source-pixel rectangle `(x0, y0, x1, y1)` cell `(i, j)` covers,
    /// clamped to the raster boundary.
    pub fn cell_source_rect(&self, i: usize, j: usize) -> (f64, f64, f64, f64) {
        let x0 = i * self.cell_size;
        let y0 = j * self.cell_size;
        let x1 = ((i + 1) * self.cell_size).min(self.source_width);
        let y1 = ((j + 1) * self.cell_size).min(self.source_height);
        (x0 as f64, y0 as f64, x1 as f64, y1 as f64)
    }
}
