//! SQLite persistence module

pub mod repos;
pub mod schema;

pub use repos::{init_database, run_migrations, SqliteAccountStore};
