//! CLI command implementations.

pub mod config;
pub mod enrich;

use std::path::Path;

use metajoin::EnrichConfig;

use crate::cli::{Cli, LogFormat};

/// Install the tracing subscriber. `RUST_LOG` overrides `-v`.
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "metajoin=warn",
        1 => "metajoin=info",
        2 => "metajoin=debug",
        _ => "metajoin=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Defaults, overlaid by the config file when one is given.
fn load_config(path: Option<&Path>) -> metajoin::Result<EnrichConfig> {
    match path {
        Some(path) => EnrichConfig::load(path),
        None => Ok(EnrichConfig::default()),
    }
}
