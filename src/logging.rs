// SPDX-License-Identifier: MPL-2.0
//! Log output for the command-line client.

use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};

/// Default filter directive for a `-v` count.
fn default_directive(verbosity: u8) -> Directive {
    let directive = match verbosity {
        0 => "portal_client=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity default.
#[must_use]
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_directive(verbosity))
        .from_env_lossy()
}

/// Installs the global fmt subscriber writing to stderr.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .try_init()
        .is_ok()
}
