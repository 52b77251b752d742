mod logging;
mod parsers;

use std::io::Write;
use std::path::{Path, PathBuf};

use chartspline::{CurveSet, Spline, build_spline};
use chartspline_data::CurvePack;
use tracing::{error, info};

const DEFAULT_LEVEL: i32 = 19;

fn workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("manifest dir has a parent")
        .to_path_buf()
}

fn main() {
    logging::init_logging();

    let mut args = std::env::args().skip(1);
    let input_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace_dir().join("curves"));
    let out_path = args.next().map(PathBuf::from).unwrap_or_else(|| {
        workspace_dir()
            .join("chartspline-lib")
            .join("data")
            .join("curves.bin.zst")
    });
    let level = args
        .next()
        .map(|s| s.parse::<i32>().expect("compression level must be an integer"))
        .unwrap_or(DEFAULT_LEVEL);

    if !input_dir.is_dir() {
        error!("curve directory not found at {:?}", input_dir);
        std::process::exit(1);
    }

    info!("parsing curve files from {:?}", input_dir);

    let mut curves = Vec::new();
    for path in parsers::curve_files(&input_dir) {
        let record = match parsers::parse_curve_file(&path) {
            Ok(record) => record,
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        };
        // building the spline validates knots before anything is written
        match build_spline(&record) {
            Ok(spline) => {
                let (lo, hi) = spline.domain();
                info!(
                    "  {}: {} knots over [{lo}, {hi}], {:?}",
                    record.name,
                    record.x.len(),
                    record.method
                );
            }
            Err(e) => {
                error!("curve '{}': {e}", record.name);
                std::process::exit(1);
            }
        }
        curves.push(record);
    }

    let pack = CurvePack {
        version: env!("CARGO_PKG_VERSION").to_string(),
        curves,
    };

    info!("serializing {} curves with postcard", pack.curves.len());
    let serialized = postcard::to_allocvec(&pack).expect("postcard serialization failed");
    info!("  serialized size: {} bytes", serialized.len());

    info!("compressing with zstd (level {level})");
    let compressed = zstd::encode_all(&serialized[..], level).expect("zstd compression failed");
    info!(
        "  compressed size: {} bytes ({:.1}x)",
        compressed.len(),
        serialized.len() as f64 / compressed.len().max(1) as f64
    );

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create output directory");
    }
    let mut f = std::fs::File::create(&out_path).expect("failed to create output file");
    f.write_all(&compressed)
        .expect("failed to write compressed data");
    info!("wrote {:?}", out_path);

    // the library decoder must accept what we just wrote
    let set = CurveSet::from_compressed(&compressed).expect("round-trip decoding failed");
    assert_eq!(set.len(), pack.curves.len());
    info!("round-trip OK");
}
