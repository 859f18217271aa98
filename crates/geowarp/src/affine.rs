/// Determinants below this magnitude are treated as degenerate.
const DEGENERACY_EPS: f64 = 1e-10;

/// A 2D affine transform.
///
/// Maps `(x, y)` to:
///
/// ```text
/// u = a * x + b * y + c
/// v = d * x + e * y + f
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    /// x-x coefficient.
    pub a: f64,
    /// x-y coefficient.
    pub b: f64,
    /// x translation.
    pub c: f64,
    /// y-x coefficient.
    pub d: f64,
    /// y-y coefficient.
    pub e: f64,
    /// y translation.
    pub f: f64,
}

impl Affine2 {
    /// The identity transform.
    pub const IDENTITY: Affine2 = Affine2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 1.0,
        f: 0.0,
    };

    /// Fit the affine transform mapping an axis-aligned source rectangle
    /// onto a quadrilateral.
    ///
    /// `quad` holds the images of the rectangle corners in winding order
    /// top-left, top-right, bottom-right, bottom-left. Four point pairs
    /// over-determine the six coefficients, so the fit is the least-squares
    /// solution; for a true parallelogram it reproduces all four corners
    /// exactly. A rectangle that is empty in either dimension yields a
    /// transform that fails [`Affine2::invert`].
    pub fn fit_quad(x0: f64, y0: f64, x1: f64, y1: f64, quad: &[(f64, f64); 4]) -> Affine2 {
        let cx = (x0 + x1) / 2.0;
        let cy = (y0 + y1) / 2.0;
        let hx = (x1 - x0) / 2.0;
        let hy = (y1 - y0) / 2.0;

        let [(q0x, q0y), (q1x, q1y), (q2x, q2y), (q3x, q3y)] = *quad;

        // Corners sit at (+-hx, +-hy) around the rectangle centre, which
        // makes the normal equations diagonal and the solution closed-form.
        let a = (-q0x + q1x + q2x - q3x) / (4.0 * hx);
        let b = (-q0x - q1x + q2x + q3x) / (4.0 * hy);
        let d = (-q0y + q1y + q2y - q3y) / (4.0 * hx);
        let e = (-q0y - q1y + q2y + q3y) / (4.0 * hy);

        let mean_x = (q0x + q1x + q2x + q3x) / 4.0;
        let mean_y = (q0y + q1y + q2y + q3y) / 4.0;

        Affine2 {
            a,
            b,
            c: mean_x - a * cx - b * cy,
            d,
            e,
            f: mean_y - d * cx - e * cy,
        }
    }

    /// Apply the transform to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.c,
            self.d * x + self.e * y + self.f,
        )
    }

    /// The determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    /// Whether all coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.c.is_finite()
            && self.d.is_finite()
            && self.e.is_finite()
            && self.f.is_finite()
    }

    /// Compute the inverse transform.
    ///
    /// Returns `None` for degenerate transforms: non-finite coefficients or
    /// a determinant within the numeric tolerance of zero, which is how a
    /// mesh cell collapsed by the projection shows up.
    pub fn invert(&self) -> Option<Affine2> {
        if !self.is_finite() {
            return None;
        }
        let det = self.determinant();
        if det.abs() <= DEGENERACY_EPS {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Affine2 {
            a: self.e * inv_det,
            b: -self.b * inv_det,
            c: (self.b * self.f - self.e * self.c) * inv_det,
            d: -self.d * inv_det,
            e: self.a * inv_det,
            f: (self.d * self.c - self.a * self.f) * inv_det,
        })
    }
}
