use geowarp_raster::{PixelScalar, Raster};

use super::Filter;

/// Resolve the source pixel containing the continuous coordinate `(u, v)`.
///
/// Coordinates follow the pixel-area convention: pixel `(x, y)` owns
/// `[x, x + 1) x [y, y + 1)`. Out-of-range coordinates clamp to the raster
/// edge. The scalar values are copied verbatim, with no blending and no
/// f32 round trip.
///
/// The raster must be non-empty.
pub fn sample_nearest<T, const C: usize>(src: &Raster<T, C>, u: f64, v: f64) -> [T; C]
where
    T: PixelScalar,
{
    let x = (u.floor() as isize).clamp(0, src.width() as isize - 1) as usize;
    let y = (v.floor() as isize).clamp(0, src.height() as isize - 1) as usize;

    let base = (y * src.width() + x) * C;
    let mut pixel = [T::default(); C];
    pixel.copy_from_slice(&src.as_slice()[base..base + C]);
    pixel
}

/// Resolve a filtered pixel value at the continuous coordinate `(u, v)`.
///
/// The kernel is applied separably over the neighbourhood of source pixel
/// centres within the filter support, with weights normalized and the
/// neighbourhood clamped to the raster edge (edge replication). Channel
/// arithmetic runs in floating point and converts back through
/// [`PixelScalar::from_f32`].
///
/// The raster must be non-empty.
pub fn sample_filtered<T, const C: usize>(
    src: &Raster<T, C>,
    u: f64,
    v: f64,
    filter: &Filter,
) -> [T; C]
where
    T: PixelScalar,
{
    let w = src.width() as isize;
    let h = src.height() as isize;
    let data = src.as_slice();

    // distances are measured between the sample point and pixel centres
    let cu = u - 0.5;
    let cv = v - 0.5;
    let r = filter.support();

    let x_lo = (cu - r).ceil() as isize;
    let x_hi = (cu + r).floor() as isize;
    let y_lo = (cv - r).ceil() as isize;
    let y_hi = (cv + r).floor() as isize;

    let mut acc = [0.0f64; C];
    let mut total = 0.0f64;

    for j in y_lo..=y_hi {
        let wy = filter.weight(j as f64 - cv);
        if wy == 0.0 {
            continue;
        }
        let jc = j.clamp(0, h - 1) as usize;
        for i in x_lo..=x_hi {
            let wx = filter.weight(i as f64 - cu);
            if wx == 0.0 {
                continue;
            }
            let ic = i.clamp(0, w - 1) as usize;
            let weight = wx * wy;
            total += weight;

            let base = (jc * w as usize + ic) * C;
            for (k, a) in acc.iter_mut().enumerate() {
                *a += weight * data[base + k].to_f32() as f64;
            }
        }
    }

    if total.abs() < 1e-12 {
        return sample_nearest(src, u, v);
    }

    let mut pixel = [T::default(); C];
    for (k, p) in pixel.iter_mut().enumerate() {
        *p = T::from_f32((acc[k] / total) as f32);
    }
    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use geowarp_raster::RasterSize;

    fn gradient_raster() -> Raster<u8, 1> {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let data = (0..16).map(|i| (i * 10) as u8).collect();
        Raster::new(size, data).unwrap()
    }

    #[test]
    fn nearest_picks_the_containing_pixel() {
        let src = gradient_raster();
        assert_eq!(sample_nearest(&src, 0.5, 0.5), [0]);
        assert_eq!(sample_nearest(&src, 1.9, 0.2), [10]);
        assert_eq!(sample_nearest(&src, 2.0, 1.0), [60]);
    }

    #[test]
    fn nearest_clamps_out_of_range() {
        let src = gradient_raster();
        assert_eq!(sample_nearest(&src, -3.0, -3.0), [0]);
        assert_eq!(sample_nearest(&src, 10.0, 10.0), [150]);
    }

    #[test]
    fn filtered_at_a_pixel_centre_is_exact() {
        let src = gradient_raster();
        for filter in [
            Filter::bilinear(1.0),
            Filter::bicubic(1.0),
            Filter::lanczos(1.0),
        ] {
            let pixel = sample_filtered(&src, 1.5, 2.5, &filter);
            assert_eq!(pixel, [90]);
        }
    }

    #[test]
    fn bilinear_blends_adjacent_pixels() {
        let size = RasterSize {
            width: 2,
            height: 1,
        };
        let src = Raster::<u8, 1>::new(size, vec![100, 200]).unwrap();

        // the boundary between the two pixels blends them equally
        let filter = Filter::bilinear(1.0);
        assert_eq!(sample_filtered(&src, 1.0, 0.5, &filter), [150]);
    }

    #[test]
    fn filtered_replicates_the_edge() {
        let size = RasterSize {
            width: 2,
            height: 2,
        };
        let src = Raster::<u8, 1>::new(size, vec![50, 50, 50, 50]).unwrap();
        let filter = Filter::bicubic(1.0);
        // support reaches outside the raster in every direction
        assert_eq!(sample_filtered(&src, 0.5, 0.5, &filter), [50]);
        assert_eq!(sample_filtered(&src, 1.9, 1.9, &filter), [50]);
    }

    #[test]
    fn filtered_multichannel() {
        let size = RasterSize {
            width: 2,
            height: 1,
        };
        let src = Raster::<u8, 4>::new(size, vec![0, 40, 80, 255, 100, 60, 80, 255]).unwrap();
        let filter = Filter::bilinear(1.0);
        assert_eq!(sample_filtered(&src, 1.0, 0.5, &filter), [50, 50, 80, 255]);
    }
}
