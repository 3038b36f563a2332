use anyhow::Context;
use clap::Parser;

use recursive_nav::cli::Cli;
use recursive_nav::logging::init_tracing;
use recursive_nav::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("loading configuration")?;
    init_tracing(&config.logging).context("initializing logging")?;
    tracing::info!(?config, "starting");

    runtime::run(&config).await.context("running terminal UI")?;
    Ok(())
}
