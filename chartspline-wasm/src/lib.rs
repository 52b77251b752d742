//! WASM bindings for chartspline.
//!
//! Build with:
//! ```sh
//! wasm-pack build chartspline-wasm
//! ```

use wasm_bindgen::prelude::*;

use chartspline::{BoundaryKind, CubicSpline, CurveSet, MonotoneSpline, Spline};

fn parse_boundary(kind: &str) -> Result<BoundaryKind, JsError> {
    match kind.to_lowercase().as_str() {
        "natural" | "second" => Ok(BoundaryKind::SecondDerivative),
        "clamped" | "first" => Ok(BoundaryKind::FirstDerivative),
        _ => Err(JsError::new(&format!("unknown boundary kind: {kind}"))),
    }
}

fn to_js(e: chartspline::SplineError) -> JsError {
    JsError::new(&e.to_string())
}

fn cubic(
    x: &[f64],
    y: &[f64],
    boundary: &str,
    left: f64,
    right: f64,
) -> Result<CubicSpline, JsError> {
    CubicSpline::new(x, y, parse_boundary(boundary)?, left, right).map_err(to_js)
}

// ── Cubic spline ──

/// Evaluates a cubic spline through `(x, y)` at each of `at`.
///
/// `boundary` is one of: "natural", "second", "clamped", "first".
#[wasm_bindgen]
pub fn cubic_spline_at(
    x: &[f64],
    y: &[f64],
    boundary: &str,
    left: f64,
    right: f64,
    at: &[f64],
) -> Result<Vec<f64>, JsError> {
    Ok(cubic(x, y, boundary, left, right)?.at_many(at))
}

/// Samples a cubic spline from `start` to `end` inclusive.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn cubic_spline_range(
    x: &[f64],
    y: &[f64],
    boundary: &str,
    left: f64,
    right: f64,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<f64>, JsError> {
    cubic(x, y, boundary, left, right)?
        .range(start, end, step)
        .map_err(to_js)
}

// ── Monotone spline ──

/// Evaluates a monotone Hermite spline through `(x, y)` at each of `at`.
#[wasm_bindgen]
pub fn monotone_spline_at(x: &[f64], y: &[f64], at: &[f64]) -> Result<Vec<f64>, JsError> {
    let s = MonotoneSpline::new(x, y).map_err(to_js)?;
    Ok(s.at_many(at))
}

/// Samples a monotone Hermite spline from `start` to `end` inclusive.
#[wasm_bindgen]
pub fn monotone_spline_range(
    x: &[f64],
    y: &[f64],
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<f64>, JsError> {
    MonotoneSpline::new(x, y)
        .map_err(to_js)?
        .range(start, end, step)
        .map_err(to_js)
}

// ── Curve packs ──

/// Returns the curve names in a compressed curve pack.
#[wasm_bindgen]
pub fn curve_pack_names(pack: &[u8]) -> Result<js_sys::Array, JsError> {
    let set = CurveSet::from_compressed(pack).map_err(to_js)?;
    Ok(set.names().map(JsValue::from_str).collect())
}

/// Samples the curve `name` from a compressed curve pack.
#[wasm_bindgen]
pub fn curve_pack_range(
    pack: &[u8],
    name: &str,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<f64>, JsError> {
    let set = CurveSet::from_compressed(pack).map_err(to_js)?;
    set.get(name)
        .map_err(to_js)?
        .range(start, end, step)
        .map_err(to_js)
}
