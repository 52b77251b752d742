use chartspline_data::BoundaryKind;
use tracing::debug;

use crate::error::Result;
use crate::segment::find_segment;
use crate::spline::{Spline, validate_knots};
use crate::tridiag::solve_tridiagonal;

/// C² cubic spline with second derivatives solved once at construction.
///
/// Outside the knot range the cubic of the nearest boundary segment is
/// extrapolated.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    y2: Vec<f64>,
}

impl CubicSpline {
    /// Builds a cubic spline through `(x[i], y[i])`.
    ///
    /// `boundary` selects which derivative `left` and `right` fix at the first
    /// and last knot. `SecondDerivative` with `0.0, 0.0` is the natural spline.
    pub fn new(
        x: &[f64],
        y: &[f64],
        boundary: BoundaryKind,
        left: f64,
        right: f64,
    ) -> Result<Self> {
        validate_knots(x, y)?;
        let n = x.len();

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let delta: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

        let mut sub = vec![0.0; n - 1];
        let mut diag = vec![0.0; n];
        let mut sup = vec![0.0; n - 1];
        let mut rhs = vec![0.0; n];

        for i in 1..n - 1 {
            sub[i - 1] = h[i - 1];
            diag[i] = 2.0 * (h[i - 1] + h[i]);
            sup[i] = h[i];
            rhs[i] = 6.0 * (delta[i] - delta[i - 1]);
        }

        match boundary {
            BoundaryKind::SecondDerivative => {
                diag[0] = 1.0;
                rhs[0] = left;
                diag[n - 1] = 1.0;
                rhs[n - 1] = right;
            }
            BoundaryKind::FirstDerivative => {
                diag[0] = 2.0 * h[0];
                sup[0] = h[0];
                rhs[0] = 6.0 * (delta[0] - left);
                sub[n - 2] = h[n - 2];
                diag[n - 1] = 2.0 * h[n - 2];
                rhs[n - 1] = 6.0 * (right - delta[n - 2]);
            }
        }

        solve_tridiagonal(&sub, &diag, &mut sup, &mut rhs)?;
        debug!(knots = n, ?boundary, "built cubic spline");

        Ok(CubicSpline {
            x: x.to_vec(),
            y: y.to_vec(),
            y2: rhs,
        })
    }

    /// Natural cubic spline: zero second derivative at both ends.
    pub fn natural(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::new(x, y, BoundaryKind::SecondDerivative, 0.0, 0.0)
    }

    /// Second derivative of the spline at each knot.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.y2
    }
}

impl Spline for CubicSpline {
    fn at(&self, x: f64) -> f64 {
        let lo = find_segment(&self.x, x);
        let hi = lo + 1;

        let diff = self.x[hi] - self.x[lo];
        let a = (self.x[hi] - x) / diff;
        let b = (x - self.x[lo]) / diff;

        a * self.y[lo]
            + b * self.y[hi]
            + (diff * diff / 6.0)
                * ((a * a - 1.0) * a * self.y2[lo] + (b * b - 1.0) * b * self.y2[hi])
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}
