//! Tracing subscriber setup.
//!
//! `specimen-core` and `specimen-adapters` only emit events; this is the one
//! place a subscriber is installed. `RUST_LOG` replaces the level derived from
//! `-v`/`-q` entirely. Without it, events from crates other than ours are
//! dropped.

use std::io::{self, IsTerminal as _};

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::cli::GlobalArgs;

const TARGETS: [&str; 3] = ["specimen", "specimen_core", "specimen_adapters"];

/// Install the global subscriber, writing to stderr.
///
/// Fails if called twice.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => specimen_filter(args.log_level())?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(args.verbose >= 2)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("tracing subscriber already installed: {e}"))
}

fn specimen_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    let mut filter = EnvFilter::new("off");
    for target in TARGETS {
        filter = filter.add_directive(format!("{target}={level}").parse()?);
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_names_every_specimen_crate() {
        let rendered = specimen_filter(LevelFilter::DEBUG).unwrap().to_string();
        for target in TARGETS {
            assert!(rendered.contains(target), "{target} missing from {rendered}");
        }
    }

    #[test]
    fn filter_accepts_every_level() {
        for level in [
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ] {
            assert!(specimen_filter(level).is_ok());
        }
    }
}
