//! Account Store - interface tới tầng lưu trữ
//!
//! Directory service chỉ làm việc qua trait này, nên có thể thay bằng
//! SQLite store, in-memory store hoặc mock trong test.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::models::{Account, NewAccount};

/// Persistence collaborator cho accounts
///
/// Implementations:
/// - `InMemoryAccountStore`: giữ accounts trong memory
/// - `SqliteAccountStore` (crate persistence): SQLite qua sqlx
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Tìm account theo id, `None` nếu không có
    async fn find_by_uuid(&self, uuid: &str) -> CoreResult<Option<Account>>;

    /// Tất cả accounts của một customer, theo thứ tự tạo
    async fn find_by_customer_uuid(&self, customer_uuid: &str) -> CoreResult<Vec<Account>>;

    /// Tạo account mới (store cấp id) và trả về danh sách accounts
    /// của customer sau khi thêm
    async fn add_new(&self, request: NewAccount) -> CoreResult<Vec<Account>>;
}

/// In-memory store - dữ liệu mất khi restart
pub struct InMemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAccountStore {
    /// Tạo store rỗng
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }

    /// Tạo store với dữ liệu có sẵn
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts.into_iter().collect()),
        }
    }

    /// Số accounts đang lưu
    pub fn len(&self) -> usize {
        self.accounts.read().map(|a| a.len()).unwrap_or(0)
    }
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::Internal("account store lock poisoned".to_string())
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_uuid(&self, uuid: &str) -> CoreResult<Option<Account>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.iter().find(|a| a.uuid == uuid).cloned())
    }

    async fn find_by_customer_uuid(&self, customer_uuid: &str) -> CoreResult<Vec<Account>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .filter(|a| a.customer_uuid == customer_uuid)
            .cloned()
            .collect())
    }

    async fn add_new(&self, request: NewAccount) -> CoreResult<Vec<Account>> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let account = Account::open(request);
        let customer_uuid = account.customer_uuid.clone();
        accounts.push(account);

        Ok(accounts
            .iter()
            .filter(|a| a.customer_uuid == customer_uuid)
            .cloned()
            .collect())
    }
}
