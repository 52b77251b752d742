use std::fmt;

#[derive(Debug)]
pub enum SplineError {
    LengthMismatch { x: usize, y: usize },
    TooFewKnots { required: usize, actual: usize },
    NotAscending { index: usize },
    InvalidDimensions { a: usize, b: usize, c: usize, d: usize },
    InvalidRange { start: f64, end: f64 },
    InvalidStep(f64),
    UnknownCurve(String),
    InvalidCurve { name: String, source: Box<SplineError> },
    DataError(String),
}

pub type Result<T> = std::result::Result<T, SplineError>;

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { x, y } => {
                write!(f, "array length mismatch: {x} x values, {y} y values")
            }
            Self::TooFewKnots { required, actual } => {
                write!(f, "need at least {required} knots, got {actual}")
            }
            Self::NotAscending { index } => write!(
                f,
                "values in x must be in ascending order (x[{index}] >= x[{}])",
                index + 1
            ),
            Self::InvalidDimensions { a, b, c, d } => write!(
                f,
                "invalid tridiagonal dimensions: a={a}, b={b}, c={c}, d={d}"
            ),
            Self::InvalidRange { start, end } => {
                write!(f, "start must be smaller than end ({start} > {end})")
            }
            Self::InvalidStep(step) => write!(f, "step must be positive and finite, got {step}"),
            Self::UnknownCurve(name) => write!(f, "unknown curve: {name}"),
            Self::InvalidCurve { name, source } => write!(f, "curve '{name}': {source}"),
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for SplineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCurve { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
