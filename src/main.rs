use anyhow::Result;
use clap::Parser;
use glowcart::cli::Cli;
use glowcart::util::env as env_util;

#[tokio::main]
async fn main() -> Result<()> {
    env_util::init_env();
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    glowcart::logging::init_tracing(default_filter)?;

    glowcart::cli::run(cli).await
}
