use crate::error::{Result, SplineError};

/// Solves a tridiagonal system `A·x = d` with the Thomas algorithm.
///
/// `a` is the sub-diagonal (length n-1), `b` the main diagonal (length n),
/// `c` the super-diagonal (length n-1) and `d` the right-hand side (length n).
///
/// `c` and `d` are overwritten during elimination. The returned slice is `d`
/// itself, holding the solution. No pivoting is done, so `A` must be
/// diagonally dominant (or otherwise safe for elimination without pivoting).
pub fn solve_tridiagonal<'d>(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    d: &'d mut [f64],
) -> Result<&'d mut [f64]> {
    let n = b.len();
    if n == 0 || a.len() + 1 != n || c.len() + 1 != n || d.len() != n {
        return Err(SplineError::InvalidDimensions {
            a: a.len(),
            b: b.len(),
            c: c.len(),
            d: d.len(),
        });
    }

    d[0] /= b[0];
    if n == 1 {
        return Ok(d);
    }

    c[0] /= b[0];
    for i in 1..n - 1 {
        let div = b[i] - a[i - 1] * c[i - 1];
        c[i] /= div;
        d[i] = (d[i] - a[i - 1] * d[i - 1]) / div;
    }
    d[n - 1] = (d[n - 1] - a[n - 2] * d[n - 2]) / (b[n - 1] - a[n - 2] * c[n - 2]);

    for i in (0..n - 1).rev() {
        d[i] -= c[i] * d[i + 1];
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_system() {
        let a = [2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut c = [2.0, 3.0, 4.0, 5.0];
        let mut d = [5.0, 15.0, 31.0, 53.0, 45.0];

        let x = solve_tridiagonal(&a, &b, &mut c, &mut d).unwrap();
        for (i, &xi) in x.iter().enumerate() {
            assert!((xi - (i + 1) as f64).abs() < 1e-9, "x[{i}] = {xi}");
        }
    }

    #[test]
    fn test_single_equation() {
        let mut d = [6.0];
        let x = solve_tridiagonal(&[], &[3.0], &mut [], &mut d).unwrap();
        assert_eq!(x.len(), 1);
        assert_eq!(x[0], 2.0);
    }

    #[test]
    fn test_solution_overwrites_rhs() {
        let mut c = [1.0];
        let mut d = [3.0, 3.0];
        solve_tridiagonal(&[1.0], &[2.0, 2.0], &mut c, &mut d).unwrap();
        assert!((d[0] - 1.0).abs() < 1e-12);
        assert!((d[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut c = [1.0, 1.0];
        let mut d = [1.0, 1.0, 1.0];
        let err = solve_tridiagonal(&[1.0], &[1.0, 1.0, 1.0], &mut c, &mut d).unwrap_err();
        assert!(matches!(err, SplineError::InvalidDimensions { a: 1, b: 3, .. }));

        assert!(solve_tridiagonal(&[], &[], &mut [], &mut []).is_err());
    }
}
