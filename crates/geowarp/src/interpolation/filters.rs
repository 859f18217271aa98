use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKind {
    Bilinear,
    Bicubic,
    Lanczos,
}

/// A separable resampling kernel with a finite support radius.
///
/// The support factor widens the footprint: weights are evaluated at
/// `t / factor` over a radius of `base_radius * factor`. Every kernel is 1
/// at distance 0 and 0 at non-zero integer distances (at factor 1), so
/// resampling an unmoved grid reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    kind: FilterKind,
    radius: f64,
    factor: f64,
}

impl Filter {
    /// Tent kernel, radius 1.
    pub fn bilinear(factor: f64) -> Filter {
        Filter {
            kind: FilterKind::Bilinear,
            radius: 1.0,
            factor,
        }
    }

    /// Catmull-Rom cubic kernel, radius 2.
    pub fn bicubic(factor: f64) -> Filter {
        Filter {
            kind: FilterKind::Bicubic,
            radius: 2.0,
            factor,
        }
    }

    /// Lanczos windowed sinc, a = 2, radius 2.
    pub fn lanczos(factor: f64) -> Filter {
        Filter {
            kind: FilterKind::Lanczos,
            radius: 2.0,
            factor,
        }
    }

    /// The effective support radius in source pixels.
    pub fn support(&self) -> f64 {
        self.radius * self.factor
    }

    /// The kernel weight at signed distance `t` from the sample point.
    pub fn weight(&self, t: f64) -> f64 {
        let t = (t / self.factor).abs();
        match self.kind {
            FilterKind::Bilinear => tent(t),
            FilterKind::Bicubic => catmull_rom(t),
            FilterKind::Lanczos => lanczos2(t),
        }
    }
}

fn tent(t: f64) -> f64 {
    if t < 1.0 {
        1.0 - t
    } else {
        0.0
    }
}

fn catmull_rom(t: f64) -> f64 {
    // cubic with a = -0.5
    if t < 1.0 {
        (1.5 * t - 2.5) * t * t + 1.0
    } else if t < 2.0 {
        ((-0.5 * t + 2.5) * t - 4.0) * t + 2.0
    } else {
        0.0
    }
}

fn sinc(t: f64) -> f64 {
    if t == 0.0 {
        1.0
    } else {
        let x = PI * t;
        x.sin() / x
    }
}

fn lanczos2(t: f64) -> f64 {
    if t < 2.0 {
        sinc(t) * sinc(t / 2.0)
    } else {
        0.0
    }
}
