use std::path::{Path, PathBuf};

use chartspline_data::{BoundaryKind, CurveRecord, SplineMethod};

/// All `*.dat` files in `dir`, sorted by file name.
pub fn curve_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("failed to read curve directory")
        .map(|entry| entry.expect("failed to read directory entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "dat"))
        .collect();
    files.sort();
    files
}

pub fn parse_curve_file(path: &Path) -> Result<CurveRecord, String> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("bad curve file name: {path:?}"))?;
    let content = std::fs::read_to_string(path).map_err(|e| format!("{path:?}: {e}"))?;
    parse_curve(name, &content)
}

/// Parses one knot file.
///
/// ```text
/// # method: cubic clamped 0.0 -1.5
/// 0.0   1.0
/// 0.5   2.25
/// ```
///
/// The method line is optional and defaults to `monotone`. Other `#` lines are
/// comments.
pub fn parse_curve(name: &str, content: &str) -> Result<CurveRecord, String> {
    let mut method = SplineMethod::Monotone;
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(method_line) = comment.trim().strip_prefix("method:") {
                method = parse_method(method_line)
                    .map_err(|e| format!("{name}:{}: {e}", lineno + 1))?;
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(format!(
                "{name}:{}: expected 'x y', got {} columns",
                lineno + 1,
                parts.len()
            ));
        }
        let parse = |s: &str| {
            s.parse::<f64>()
                .map_err(|e| format!("{name}:{}: '{s}': {e}", lineno + 1))
        };
        x.push(parse(parts[0])?);
        y.push(parse(parts[1])?);
    }

    Ok(CurveRecord {
        name: name.to_string(),
        method,
        x,
        y,
    })
}

fn parse_method(method_line: &str) -> Result<SplineMethod, String> {
    let words: Vec<&str> = method_line.split_whitespace().collect();
    match words.as_slice() {
        ["monotone"] => Ok(SplineMethod::Monotone),
        ["cubic"] => Ok(SplineMethod::NATURAL),
        ["cubic", kind, left, right] => {
            let boundary = match kind.to_lowercase().as_str() {
                "natural" | "second" => BoundaryKind::SecondDerivative,
                "clamped" | "first" => BoundaryKind::FirstDerivative,
                _ => return Err(format!("unknown boundary kind: {kind}")),
            };
            let value = |s: &str| {
                s.parse::<f64>()
                    .map_err(|e| format!("boundary value '{s}': {e}"))
            };
            Ok(SplineMethod::Cubic {
                boundary,
                left: value(*left)?,
                right: value(*right)?,
            })
        }
        _ => Err(format!("unrecognised method: {}", method_line.trim())),
    }
}
