//! Logging setup.

use std::io;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Default filter when neither `RUST_LOG` nor `--log-level` is given.
const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber and routes `log` records into it.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init(level: Option<&str>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_FILTER)))
        .context("invalid log filter")?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr));

    tracing::subscriber::set_global_default(subscriber)
        .context("a global subscriber is already installed")?;
    tracing_log::LogTracer::init().context("a global logger is already installed")?;
    Ok(())
}
