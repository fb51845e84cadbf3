//! Logging initialisation.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` takes precedence; otherwise `--verbose` enables `info` for this
//! crate and the default is `warn`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "dockctx=info" } else { "warn" }
}

/// Initialise the global tracing subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
