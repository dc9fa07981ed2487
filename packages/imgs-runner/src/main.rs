//! `imgs` binary.
//!
//! Writes the six cover images (`zip.png`, `zip.webp`, `aes.png`,
//! `aes.webp`, `cloud.png`, `cloud.webp`) and generates embed modules.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Action, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&cli.log_level),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let result = match cli.action() {
        Action::Run(args) => commands::run(args).await.map(|_| ()),
        Action::Embed(args) => commands::embed(args).map(|_| ()),
    };

    // failures are reported, not turned into a non-zero exit status
    if let Err(err) = result {
        err.log();
        eprintln!("error: {err}");
    }
}
