#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A set of named curves, deserialized from a compressed pack file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePack {
    pub version: String,
    pub curves: Vec<CurveRecord>,
}

/// One curve: its knots and the interpolation method used between them.
///
/// `x` must be strictly ascending and the same length as `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub name: String,
    pub method: SplineMethod,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SplineMethod {
    /// C² cubic spline with the given boundary condition at each end.
    Cubic {
        boundary: BoundaryKind,
        left: f64,
        right: f64,
    },
    /// Fritsch–Carlson monotone cubic Hermite spline.
    Monotone,
}

/// Which derivative the boundary values of a cubic spline fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryKind {
    /// `y''` is fixed at both ends; zero values give the natural spline.
    SecondDerivative,
    /// `y'` is fixed at both ends (clamped spline).
    FirstDerivative,
}

impl SplineMethod {
    /// Natural cubic spline: zero curvature at both ends.
    pub const NATURAL: SplineMethod = SplineMethod::Cubic {
        boundary: BoundaryKind::SecondDerivative,
        left: 0.0,
        right: 0.0,
    };
}
