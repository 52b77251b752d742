//! Spline interpolation for chart curves.
//!
//! Two interpolants share the [`Spline`] trait:
//!
//! - [`CubicSpline`]: C² cubic spline with natural or clamped ends, extrapolating
//!   the boundary cubic outside the knots.
//! - [`MonotoneSpline`]: Fritsch–Carlson monotone Hermite spline, flat outside
//!   the knots and free of overshoot between them.
//!
//! ```
//! use chartspline::{MonotoneSpline, Spline};
//!
//! let s = MonotoneSpline::new(&[0.0, 1.0, 2.0], &[0.0, 0.2, 1.0]).unwrap();
//! assert_eq!(s.at(1.0), 0.2);
//! assert_eq!(s.range(0.0, 2.0, 0.5).unwrap().len(), 5);
//! ```

pub mod cubic;
pub mod error;
pub mod hermite;
#[cfg(feature = "pack")]
pub mod pack;
pub mod segment;
pub mod spline;
pub mod tridiag;

pub use chartspline_data::{BoundaryKind, CurvePack, CurveRecord, SplineMethod};
pub use cubic::CubicSpline;
pub use error::{Result, SplineError};
pub use hermite::MonotoneSpline;
#[cfg(feature = "pack")]
pub use pack::{CurveSet, build_spline};
pub use spline::Spline;
pub use chartspline_data;
