//! Config command

use anyhow::Result;
use bank_account_config::AppConfig;

pub fn handle(config: &AppConfig) -> Result<()> {
    println!("⚙️  Current Configuration:");
    println!("{}", serde_json::to_string_pretty(config)?);
    println!();
    println!("📍 Bind address: {}", config.bind_address());

    Ok(())
}
