//! Logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter: this crate at debug, everything else at warn.
const DEFAULT_FILTER: &str = "warn,spark_widgets=debug";

/// Install a `tracing` subscriber that writes compact lines to stdout.
///
/// Honors `RUST_LOG`. Returns false if a global subscriber was already set,
/// so calling it from several tests is harmless.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = fmt::format().compact().with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().event_format(format))
        .try_init()
        .is_ok()
}
