use std::collections::HashMap;

use chartspline_data::{CurvePack, CurveRecord, SplineMethod};
use tracing::debug;

use crate::cubic::CubicSpline;
use crate::error::{Result, SplineError};
use crate::hermite::MonotoneSpline;
use crate::spline::Spline;

type BoxedSpline = Box<dyn Spline + Send + Sync>;

/// Builds the spline a curve record describes.
pub fn build_spline(record: &CurveRecord) -> Result<BoxedSpline> {
    let spline: BoxedSpline = match record.method {
        SplineMethod::Cubic {
            boundary,
            left,
            right,
        } => Box::new(CubicSpline::new(&record.x, &record.y, boundary, left, right)?),
        SplineMethod::Monotone => Box::new(MonotoneSpline::new(&record.x, &record.y)?),
    };
    Ok(spline)
}

/// Named curves, ready to evaluate.
pub struct CurveSet {
    version: String,
    names: Vec<String>,
    curves: HashMap<String, BoxedSpline>,
}

impl CurveSet {
    /// Builds every curve in `pack`, failing on the first invalid one.
    pub fn from_pack(pack: CurvePack) -> Result<Self> {
        let mut names = Vec::with_capacity(pack.curves.len());
        let mut curves = HashMap::with_capacity(pack.curves.len());
        for record in &pack.curves {
            let spline = build_spline(record).map_err(|e| SplineError::InvalidCurve {
                name: record.name.clone(),
                source: Box::new(e),
            })?;
            if curves.insert(record.name.clone(), spline).is_none() {
                names.push(record.name.clone());
            }
        }
        debug!(version = %pack.version, curves = names.len(), "loaded curve pack");
        Ok(CurveSet {
            version: pack.version,
            names,
            curves,
        })
    }

    /// Decodes a zstd-compressed, postcard-encoded [`CurvePack`].
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| SplineError::DataError(format!("zstd header: {e}")))?;
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed)
            .map_err(|e| SplineError::DataError(format!("zstd decompression: {e}")))?;

        let pack: CurvePack = postcard::from_bytes(&decompressed)
            .map_err(|e| SplineError::DataError(format!("postcard: {e}")))?;
        Self::from_pack(pack)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Curve names in pack order. A later record with a repeated name
    /// replaces the earlier spline but keeps its position.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Result<&(dyn Spline + Send + Sync)> {
        self.curves
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| SplineError::UnknownCurve(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, method: SplineMethod) -> CurveRecord {
        CurveRecord {
            name: name.to_string(),
            method,
            x: vec![0.0, 1.0, 2.0],
            y: vec![0.0, 0.5, 2.0],
        }
    }

    #[test]
    fn test_from_pack() {
        let pack = CurvePack {
            version: "test".to_string(),
            curves: vec![
                record("ramp", SplineMethod::Monotone),
                record("smooth", SplineMethod::NATURAL),
            ],
        };
        let set = CurveSet::from_pack(pack).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.version(), "test");
        assert_eq!(set.names().collect::<Vec<_>>(), ["ramp", "smooth"]);
        assert!((set.get("ramp").unwrap().at(1.0) - 0.5).abs() < 1e-12);
        assert!(matches!(set.get("missing"), Err(SplineError::UnknownCurve(_))));
    }

    #[test]
    fn test_invalid_record_names_curve() {
        let mut bad = record("bad", SplineMethod::Monotone);
        bad.y.pop();
        let pack = CurvePack {
            version: "test".to_string(),
            curves: vec![bad],
        };
        match CurveSet::from_pack(pack) {
            Err(SplineError::InvalidCurve { name, source }) => {
                assert_eq!(name, "bad");
                assert!(matches!(*source, SplineError::LengthMismatch { .. }));
            }
            _ => panic!("expected InvalidCurve"),
        }
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(matches!(
            CurveSet::from_compressed(b"not zstd"),
            Err(SplineError::DataError(_))
        ));
    }
}
