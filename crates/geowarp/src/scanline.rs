//! Binary scanline conversion of polygons into horizontal pixel spans.
//!
//! Coverage is binary: a pixel is inside when its centre is inside the
//! polygon, with no partial-coverage anti-aliasing. Sampling rows at
//! `y + 0.5` with a half-open edge rule makes quads that share an edge tile
//! without gaps or double-written pixels.

/// Rasterize a closed polygon, invoking `span` for every covered run of
/// pixels.
///
/// `points` are the polygon vertices in device coordinates, in order (the
/// closing edge back to the first vertex is implicit). Spans are clipped to
/// `[0, clip_width) x [0, clip_height)` and reported as
/// `span(y, x_start, x_end)` with `x_end` exclusive.
///
/// # Examples
///
/// ```
/// use geowarp::scanline::fill_polygon;
///
/// let quad = [(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)];
/// let mut covered = Vec::new();
/// fill_polygon(&quad, 8, 8, |y, x0, x1| covered.push((y, x0, x1)));
/// assert_eq!(covered, vec![(0, 0, 4), (1, 0, 4)]);
/// ```
pub fn fill_polygon<F>(points: &[(f64, f64)], clip_width: usize, clip_height: usize, mut span: F)
where
    F: FnMut(usize, usize, usize),
{
    if points.len() < 3 || clip_width == 0 || clip_height == 0 {
        return;
    }

    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let y_lo = min_y.floor().max(0.0) as usize;
    let y_hi = max_y.ceil().min(clip_height as f64).max(0.0) as usize;

    let mut hits: Vec<f64> = Vec::with_capacity(points.len());

    for y in y_lo..y_hi {
        let yc = y as f64 + 0.5;

        hits.clear();
        for (k, &(px, py)) in points.iter().enumerate() {
            let (qx, qy) = points[(k + 1) % points.len()];
            // half-open in y: horizontal edges never intersect, shared
            // vertices count once
            if (py <= yc) != (qy <= yc) {
                let t = (yc - py) / (qy - py);
                hits.push(px + t * (qx - px));
            }
        }
        hits.sort_by(|a, b| a.total_cmp(b));

        for pair in hits.chunks_exact(2) {
            // pixel centres x + 0.5 inside [pair[0], pair[1])
            let x_start = (pair[0] - 0.5).ceil().clamp(0.0, clip_width as f64) as usize;
            let x_end = (pair[1] - 0.5).ceil().clamp(0.0, clip_width as f64) as usize;
            if x_start < x_end {
                span(y, x_start, x_end);
            }
        }
    }
}
