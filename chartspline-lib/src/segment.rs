/// Finds the segment of `xs` that contains `x`.
///
/// Segments are left inclusive and right exclusive, so the result is the index
/// `i` with `xs[i] <= x < xs[i + 1]`:
///
/// ```
/// use chartspline::segment::find_segment;
///
/// assert_eq!(find_segment(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0), 2);
/// assert_eq!(find_segment(&[1.0, 2.0, 3.0, 4.0, 5.0], 4.5), 3);
/// ```
///
/// Values outside the breakpoints select the nearest boundary segment, so the
/// result is always in `0..=xs.len() - 2`. `xs` must be strictly ascending and
/// hold at least two values.
///
/// # Panics
///
/// Panics if `xs` has fewer than two values. Spline constructors reject such
/// knot sets, so evaluation never reaches this.
pub fn find_segment(xs: &[f64], x: f64) -> usize {
    assert!(xs.len() >= 2, "need at least two breakpoints");
    let last = xs.len() - 1;
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[last] {
        return last - 1;
    }
    // NaN fails every comparison and would otherwise underflow here
    xs.partition_point(|&v| v <= x).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRREGULAR: [f64; 5] = [-1.2, -1.0, 0.6, 1.3, 100.0];

    #[test]
    fn test_inside_segment() {
        assert_eq!(find_segment(&[1.0, 2.0, 3.0, 4.0, 5.0], 4.5), 3);
        assert_eq!(find_segment(&IRREGULAR, 0.0), 1);
    }

    #[test]
    fn test_on_breakpoint() {
        assert_eq!(find_segment(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0), 2);
        assert_eq!(find_segment(&IRREGULAR, -1.2), 0);
        assert_eq!(find_segment(&IRREGULAR, 100.0), 3);
    }

    #[test]
    fn test_clamps_outside() {
        assert_eq!(find_segment(&IRREGULAR, -100.0), 0);
        assert_eq!(find_segment(&IRREGULAR, 101.0), 3);
        assert_eq!(find_segment(&[0.0, 1.0], 7.0), 0);
    }

    #[test]
    #[should_panic(expected = "need at least two breakpoints")]
    fn test_single_breakpoint_panics() {
        find_segment(&[1.0], 2.0);
    }

    #[test]
    fn test_nan_query() {
        assert_eq!(find_segment(&IRREGULAR, f64::NAN), 0);
    }
}
