//! Command line noise image generator.

mod cli;
mod logging;
mod output;

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use noisegen_core::{GeneratorConfig, generate};

use crate::cli::Cli;

fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json5::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    let base = match &cli.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            load_config(path)?
        }
        None => GeneratorConfig::default(),
    };
    let config = cli.apply(base);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let generated = {
        let _span = tracing::info_span!("generate", size = config.size).entered();
        generate(&config)?
    };
    log::info!("used seed {}", generated.seed);

    output::write_png(&cli.filename, &generated.field, config.target_max)?;
    log::info!("wrote {}", cli.filename.display());
    Ok(())
}
