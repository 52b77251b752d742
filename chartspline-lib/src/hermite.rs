//! Monotone cubic Hermite interpolation (Fritsch–Carlson).
//!
//! Tangents are chosen so the curve never overshoots between knots: on every
//! interval where the data rises (or falls) the interpolant rises (or falls)
//! too. The price is C¹ instead of C² continuity. Useful for color gradients,
//! envelopes and other data where overshoot is visible.
//!
//! See <https://en.wikipedia.org/wiki/Monotone_cubic_interpolation>.

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::Result;
use crate::segment::find_segment;
use crate::spline::{Spline, validate_knots};

/// Monotone cubic Hermite spline.
///
/// Outside the knot range the spline is flat: it returns the first or last
/// knot value. Per-segment polynomial coefficients are computed on first use
/// and cached; the cache is thread safe and never changes results.
#[derive(Debug)]
pub struct MonotoneSpline {
    x: Vec<f64>,
    p: Vec<f64>,
    m: Vec<f64>,
    segs: Vec<OnceLock<HermiteSegment>>,
}

/// `p(x) = a·dx³ + b·dx² + c·dx + d` with `dx = x - x_k`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct HermiteSegment {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl MonotoneSpline {
    /// Builds a monotone spline through `(x[i], y[i])`.
    ///
    /// `x` must be strictly ascending and as long as `y`, with at least two knots.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        validate_knots(x, y)?;
        let m = monotone_tangents(x, y);
        debug!(knots = x.len(), "built monotone spline");
        Ok(Self::from_tangents(x, y, m))
    }

    fn from_tangents(x: &[f64], p: &[f64], m: Vec<f64>) -> Self {
        let segs = (0..x.len() - 1).map(|_| OnceLock::new()).collect();
        MonotoneSpline {
            x: x.to_vec(),
            p: p.to_vec(),
            m,
            segs,
        }
    }

    /// Tangent slope at each knot.
    pub fn tangents(&self) -> &[f64] {
        &self.m
    }

    fn segment(&self, seg: usize) -> &HermiteSegment {
        self.segs[seg].get_or_init(|| {
            trace!(seg, "caching hermite segment");
            let (p0, p1) = (self.p[seg], self.p[seg + 1]);
            let (m0, m1) = (self.m[seg], self.m[seg + 1]);
            let h = self.x[seg + 1] - self.x[seg];
            HermiteSegment {
                a: ((2.0 * p0 - 2.0 * p1) / h + m0 + m1) / h / h,
                b: ((-3.0 * p0 + 3.0 * p1) / h - 2.0 * m0 - m1) / h,
                c: m0,
                d: p0,
            }
        })
    }
}

/// Computes Fritsch–Carlson tangents for validated knots.
fn monotone_tangents(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();

    // Secant slopes between successive knots.
    let dk: Vec<f64> = (0..n - 1)
        .map(|i| (y[i + 1] - y[i]) / (x[i + 1] - x[i]))
        .collect();

    // Interior tangents average the neighbouring secants, zero at local extrema.
    let mut m = vec![0.0; n];
    for i in 1..n - 1 {
        let opposite = (dk[i - 1] < 0.0 && dk[i] > 0.0) || (dk[i - 1] > 0.0 && dk[i] < 0.0);
        if !opposite {
            m[i] = (dk[i - 1] + dk[i]) / 2.0;
        }
    }
    m[0] = dk[0];
    m[n - 1] = dk[n - 2];

    // Left to right: m[i + 1] written here is read again at i + 1.
    for i in 0..n - 1 {
        if y[i] == y[i + 1] {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }

        let alpha = m[i] / dk[i];
        if i >= 1 {
            let prev_beta = m[i] / dk[i - 1];
            if alpha < 0.0 && prev_beta < 0.0 {
                m[i] = 0.0;
            }
        }

        let beta = m[i + 1] / dk[i];
        if alpha * alpha + beta * beta > 9.0 {
            let tau = 3.0 / alpha.hypot(beta);
            trace!(segment = i, tau, "rescaling tangents to prevent overshoot");
            m[i] = tau * alpha * dk[i];
            m[i + 1] = tau * beta * dk[i];
        }
    }
    m
}

impl Spline for MonotoneSpline {
    fn at(&self, x: f64) -> f64 {
        let last = self.x.len() - 1;
        if x <= self.x[0] {
            return self.p[0];
        }
        if x >= self.x[last] {
            return self.p[last];
        }

        // If x is a knot this picks the segment starting at it.
        let seg = find_segment(&self.x, x);
        let s = self.segment(seg);
        let dx = x - self.x[seg];

        dx * (dx * (dx * s.a + s.b) + s.c) + s.d
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}
