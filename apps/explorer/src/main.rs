mod cli;
mod config;
mod demos;
mod errors;
mod models;
mod queries;
mod source;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cmd;
use crate::config::Config;
use crate::source::{refresh_and_load, CachedJobSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting job explorer v{}", env!("CARGO_PKG_VERSION"));

    let source = CachedJobSource::new(config.cache_path.clone(), config.feed_url.clone())?
        .with_retry_delay(config.retry_delay);
    info!("Using job cache at {}", source.cache_path().display());
    let jobs = refresh_and_load(&source, config.refresh || cmd.refresh).await?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "Total jobs:  {}\n", jobs.len())?;
    demos::run(&cmd.demo(), &jobs, &mut out)?;
    out.flush()?;

    Ok(())
}
