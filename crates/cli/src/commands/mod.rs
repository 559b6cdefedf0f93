//! CLI Commands

pub mod account;
pub mod config;

use clap::{Parser, Subcommand};

/// Bank account directory CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database URL (mặc định lấy từ DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage bank accounts
    Account(account::AccountArgs),

    /// Show configuration
    Config,
}
