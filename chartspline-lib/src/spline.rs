use crate::error::{Result, SplineError};

/// A curve interpolated through a fixed set of knots.
///
/// Evaluation never fails: points outside the knot range follow the
/// extrapolation policy of the implementation.
pub trait Spline {
    /// Evaluates the curve at `x`.
    fn at(&self, x: f64) -> f64;

    /// First and last knot x value.
    fn domain(&self) -> (f64, f64);

    /// Evaluates the curve at `start, start + step, ...` up to and including `end`.
    ///
    /// Produces `floor((end - start) / step) + 1` values. Fails if `start > end`
    /// or if `step` is not a positive finite number.
    fn range(&self, start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
        let n = sample_count(start, end, step)?;
        Ok((0..n).map(|i| self.at(start + i as f64 * step)).collect())
    }

    /// Evaluates the curve at each of `xs`.
    fn at_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.at(x)).collect()
    }
}

impl<S: Spline + ?Sized> Spline for Box<S> {
    fn at(&self, x: f64) -> f64 {
        (**self).at(x)
    }

    fn domain(&self) -> (f64, f64) {
        (**self).domain()
    }
}

/// Largest sample count a `Vec<f64>` can hold.
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Number of samples `Spline::range` produces for the given arguments.
///
/// Bounds must be finite with `start <= end`. A step so small that the count
/// would not fit in memory is rejected as `InvalidStep`.
pub fn sample_count(start: f64, end: f64, step: f64) -> Result<usize> {
    // also rejects NaN bounds
    if !start.is_finite() || !end.is_finite() || !(start <= end) {
        return Err(SplineError::InvalidRange { start, end });
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(SplineError::InvalidStep(step));
    }
    let intervals = ((end - start) / step).floor();
    if !intervals.is_finite() || intervals >= MAX_SAMPLES as f64 {
        return Err(SplineError::InvalidStep(step));
    }
    Ok(intervals as usize + 1)
}

/// Checks the knot arrays shared by every spline constructor.
pub(crate) fn validate_knots(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(SplineError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(SplineError::TooFewKnots {
            required: 2,
            actual: x.len(),
        });
    }
    if let Some(index) = x.windows(2).position(|w| !(w[0] < w[1])) {
        return Err(SplineError::NotAscending { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Spline for Identity {
        fn at(&self, x: f64) -> f64 {
            x
        }

        fn domain(&self) -> (f64, f64) {
            (0.0, 1.0)
        }
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.0, 1.0, 0.25).unwrap(), 5);
        assert_eq!(sample_count(0.0, 1.0, 0.3).unwrap(), 4);
        assert_eq!(sample_count(2.0, 2.0, 0.1).unwrap(), 1);
    }

    #[test]
    fn test_sample_count_rejects_bad_input() {
        assert!(matches!(
            sample_count(1.0, 0.0, 0.1),
            Err(SplineError::InvalidRange { .. })
        ));
        assert!(matches!(sample_count(0.0, 1.0, 0.0), Err(SplineError::InvalidStep(_))));
        assert!(matches!(sample_count(0.0, 1.0, -1.0), Err(SplineError::InvalidStep(_))));
        assert!(sample_count(0.0, 1.0, f64::NAN).is_err());
        assert!(sample_count(f64::NAN, 1.0, 0.1).is_err());
    }

    #[test]
    fn test_sample_count_rejects_unbounded() {
        assert!(matches!(
            sample_count(0.0, f64::INFINITY, 1.0),
            Err(SplineError::InvalidRange { .. })
        ));
        assert!(matches!(
            sample_count(f64::NEG_INFINITY, 1.0, 1.0),
            Err(SplineError::InvalidRange { .. })
        ));
        assert!(matches!(
            sample_count(0.0, 1e300, 1e-10),
            Err(SplineError::InvalidStep(_))
        ));
        // overflows f64 to infinity before the floor
        assert!(matches!(
            sample_count(-1e308, 1e308, 1e-300),
            Err(SplineError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_range_positions() {
        let v = Identity.range(1.0, 2.0, 0.5).unwrap();
        assert_eq!(v, vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_boxed_spline() {
        let s: Box<dyn Spline> = Box::new(Identity);
        assert_eq!(s.at_many(&[0.25, 0.75]), vec![0.25, 0.75]);
        assert_eq!(s.domain(), (0.0, 1.0));
    }

    #[test]
    fn test_validate_knots() {
        assert!(validate_knots(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
        assert!(matches!(
            validate_knots(&[0.0, 1.0], &[0.0]),
            Err(SplineError::LengthMismatch { x: 2, y: 1 })
        ));
        assert!(matches!(
            validate_knots(&[0.0], &[0.0]),
            Err(SplineError::TooFewKnots { actual: 1, .. })
        ));
        assert!(matches!(
            validate_knots(&[0.0, 2.0, 2.0], &[0.0, 1.0, 2.0]),
            Err(SplineError::NotAscending { index: 1 })
        ));
    }
}
