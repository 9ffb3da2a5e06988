//! Logging setup
//!
//! Log output goes to stderr; stdout is reserved for `--stdout` renders and
//! `--print-config`.

use crate::error::{Error, Result};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count
/// - 0: errors only
/// - 1 (-v): info
/// - 2 (-vv): debug
/// - 3+ (-vvv): trace
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "load_template=info",
        2 => "load_template=debug",
        _ => "load_template=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity filter.
pub fn init(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(verbosity >= 2)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
