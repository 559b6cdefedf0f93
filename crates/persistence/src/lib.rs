//! # Bank Account Persistence
//!
//! SQLite implementation của `AccountStore`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bank_account_persistence::SqliteAccountStore;
//!
//! let store = SqliteAccountStore::connect("sqlite:bank_accounts.db").await?;
//! let accounts = store.find_by_customer_uuid("Customer1").await?;
//! ```

pub mod error;
pub mod sqlite;

pub use error::{PersistenceError, PersistenceResult};
pub use sqlite::schema::AccountRow;
pub use sqlite::{init_database, run_migrations, SqliteAccountStore};
