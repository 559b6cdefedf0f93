//! Account commands

use anyhow::Result;
use bank_account_core::{Account, AccountDirectory, NewAccount};
use bank_account_persistence::SqliteAccountStore;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub action: AccountAction,
}

#[derive(Subcommand, Debug)]
pub enum AccountAction {
    /// Create a new account
    Create {
        /// Customer ID
        #[arg(short, long)]
        customer: String,

        /// Opening balance
        #[arg(short, long)]
        balance: Decimal,
    },

    /// Get account by ID
    Get {
        /// Account ID
        #[arg(short, long)]
        id: String,
    },

    /// List accounts of a customer
    List {
        /// Customer ID
        #[arg(short, long)]
        customer: String,
    },
}

pub async fn handle(args: AccountArgs, database_url: &str) -> Result<()> {
    let store = SqliteAccountStore::connect(database_url).await?;
    let directory = AccountDirectory::new(Arc::new(store));

    match args.action {
        AccountAction::Create { customer, balance } => {
            let accounts = directory
                .create_new(NewAccount::new(customer, balance))
                .await?;
            println!("✅ Account created. Customer accounts:");
            println!("{}", serde_json::to_string_pretty(&accounts)?);
        }

        AccountAction::Get { id } => match directory.get_by_id(&id).await {
            Ok(account) => {
                println!("🏦 Account found:");
                println!("{}", serde_json::to_string_pretty(&account)?);
            }
            Err(e) if e.is_not_found() => println!("❌ {}", e),
            Err(e) => return Err(e.into()),
        },

        AccountAction::List { customer } => {
            let accounts = directory.get_by_customer_id(&customer).await?;
            print_accounts(&customer, &accounts);
        }
    }

    Ok(())
}

fn print_accounts(customer: &str, accounts: &[Account]) {
    if accounts.is_empty() {
        println!("📭 No accounts found for customer {}", customer);
    } else {
        println!("👥 Accounts for customer {} ({}):", customer, accounts.len());
        for account in accounts {
            println!("  - {}", account);
        }
    }
}
