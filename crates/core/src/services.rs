//! Business services

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::models::{Account, NewAccount};
use crate::store::AccountStore;

/// Chuỗi cố định trả về cho health check
pub const HEALTH_MESSAGE: &str = "Application is healthy";

/// Account Directory - dịch các truy vấn account sang `AccountStore`
///
/// Không giữ state riêng; mọi thao tác đi thẳng xuống store.
#[derive(Clone)]
pub struct AccountDirectory {
    store: Arc<dyn AccountStore>,
}

impl AccountDirectory {
    /// Tạo directory với store cho trước
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Health check, luôn thành công
    pub fn health_check(&self) -> &'static str {
        HEALTH_MESSAGE
    }

    /// Lấy account theo id
    pub async fn get_by_id(&self, id: &str) -> CoreResult<Account> {
        tracing::debug!(account_id = %id, "looking up account");
        self.store
            .find_by_uuid(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    /// Lấy tất cả accounts của customer, rỗng nếu không có
    pub async fn get_by_customer_id(&self, customer_id: &str) -> CoreResult<Vec<Account>> {
        tracing::debug!(customer_id = %customer_id, "listing customer accounts");
        self.store.find_by_customer_uuid(customer_id).await
    }

    /// Tạo account mới, trả về danh sách accounts mà store trả về
    pub async fn create_new(&self, request: NewAccount) -> CoreResult<Vec<Account>> {
        request.validate()?;

        let customer_id = request.customer_uuid.clone();
        let accounts = self.store.add_new(request).await?;
        tracing::info!(
            customer_id = %customer_id,
            accounts = accounts.len(),
            "account created"
        );
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAccountStore;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    fn directory_with(accounts: Vec<Account>) -> AccountDirectory {
        AccountDirectory::new(Arc::new(InMemoryAccountStore::with_accounts(accounts)))
    }

    /// Store luôn lỗi, để kiểm tra lỗi được truyền lên
    struct FailingStore;

    #[async_trait]
    impl AccountStore for FailingStore {
        async fn find_by_uuid(&self, _uuid: &str) -> CoreResult<Option<Account>> {
            Err(CoreError::Internal("disk on fire".into()))
        }

        async fn find_by_customer_uuid(&self, _customer_uuid: &str) -> CoreResult<Vec<Account>> {
            Err(CoreError::Internal("disk on fire".into()))
        }

        async fn add_new(&self, _request: NewAccount) -> CoreResult<Vec<Account>> {
            panic!("add_new must not be reached for invalid input");
        }
    }

    #[test]
    fn test_health_check() {
        let directory = directory_with(vec![]);
        assert_eq!(directory.health_check(), "Application is healthy");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let directory = directory_with(vec![Account::new("123", "Customer1", dec!(1000))]);

        let account = directory.get_by_id("123").await.unwrap();
        assert_eq!(account.uuid, "123");
        assert_eq!(account.customer_uuid, "Customer1");
        assert_eq!(account.balance, dec!(1000));

        let err = directory.get_by_id("404").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_by_customer_id() {
        let account = Account::new("123", "Customer1", dec!(1000));
        let directory = directory_with(vec![account.clone()]);

        assert_eq!(
            directory.get_by_customer_id("Customer1").await.unwrap(),
            vec![account]
        );
        assert!(directory
            .get_by_customer_id("Customer9")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_new() {
        let directory = directory_with(vec![Account::new("123", "Customer1", dec!(1000))]);

        let accounts = directory
            .create_new(NewAccount::new("Customer1", dec!(1500)))
            .await
            .unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].balance, dec!(1500));
    }

    #[tokio::test]
    async fn test_create_new_rejects_invalid_request() {
        let directory = AccountDirectory::new(Arc::new(FailingStore));

        let err = directory
            .create_new(NewAccount::new("Customer1", dec!(-1)))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let directory = AccountDirectory::new(Arc::new(FailingStore));

        assert!(matches!(
            directory.get_by_id("123").await,
            Err(CoreError::Internal(_))
        ));
        assert!(matches!(
            directory.get_by_customer_id("Customer1").await,
            Err(CoreError::Internal(_))
        ));
    }
}
