use std::env;

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Our crates log at debug, everything else at warn.
const DEFAULT_FILTER: &str = "warn,chartspline=debug,chartspline_generate=debug";

/// Installs a stdout `tracing` subscriber. `RUST_LOG` directives are appended
/// to the default filter.
pub fn init_logging() {
    let format = fmt::format().compact().without_time();
    let stdout_log = fmt::layer().event_format(format);

    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let subscriber = Registry::default()
        .with(EnvFilter::new(filter))
        .with(stdout_log);
    tracing::subscriber::set_global_default(subscriber).expect("unable to install log subscriber");
}
