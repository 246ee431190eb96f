//! Garnet driver: command-line parsing, the interactive loop and script runs.
//!
//! The binary (`garnet`) is a thin shell over this library so the pieces
//! can be exercised without spawning processes.

pub mod cli;
pub mod commands;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Environment variables read for the log filter, in priority order.
const LOG_FILTER_VARS: &[&str] = &["GARNET_LOG", "RUST_LOG"];

/// Install the tracing subscriber when a log filter is configured.
///
/// Enable with `GARNET_LOG=garnet_eval=debug` (or `RUST_LOG`). Without
/// either variable nothing is installed and tracing stays disabled.
pub fn init_tracing() {
    let Some(directives) = LOG_FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
    else {
        return;
    };

    let layer = HierarchicalLayer::new(2)
        .with_writer(std::io::stderr)
        .with_targets(true)
        .with_bracketed_fields(true);
    if let Err(err) = tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(layer)
        .try_init()
    {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
