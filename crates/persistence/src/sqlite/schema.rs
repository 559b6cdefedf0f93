//! Row types cho sqlx mapping từ SQLite tables.
//! Schema được định nghĩa trong migrations/20260101000000_create_bank_accounts.sql

use bank_account_core::Account;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{PersistenceError, PersistenceResult};

/// Row type cho bảng `bank_accounts`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRow {
    pub seq: i64,
    pub uuid: String,
    pub customer_uuid: String,
    pub balance: String, // Decimal stored as TEXT
    pub created_at: DateTime<Utc>,
}

impl AccountRow {
    /// Chuyển row sang domain `Account`
    pub fn into_account(self) -> PersistenceResult<Account> {
        let balance = Decimal::from_str(&self.balance)
            .map_err(|_| PersistenceError::InvalidDecimal(self.balance.clone()))?;
        Ok(Account::new(self.uuid, self.customer_uuid, balance))
    }
}
