//! CLI Application

mod commands;

use bank_account_config::AppConfig;
use clap::Parser;
use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let database_url = cli.database_url.unwrap_or_else(|| config.database_url.clone());

    match cli.command {
        Commands::Account(args) => commands::account::handle(args, &database_url).await?,
        Commands::Config => commands::config::handle(&config)?,
    }

    Ok(())
}
