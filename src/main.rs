//! jsoncanvas - JSON Canvas command line tool
//!
//! CLI entry point: validates, formats and inspects `.canvas` files.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod palette;
mod settings;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jsoncanvas=info,jsoncanvas_core=warn,jsoncanvas_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();
    debug!("jsoncanvas v{}", env!("CARGO_PKG_VERSION"));

    cli::run(cli)
}
