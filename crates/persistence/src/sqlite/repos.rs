//! SQLite implementation của `AccountStore`

use async_trait::async_trait;
use bank_account_core::{Account, AccountStore, CoreResult, NewAccount};
use chrono::Utc;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Sqlite, SqlitePool};

use crate::error::PersistenceResult;
use crate::sqlite::schema::AccountRow;

const SELECT_BY_UUID: &str = "SELECT * FROM bank_accounts WHERE uuid = ?";
const SELECT_BY_CUSTOMER: &str =
    "SELECT * FROM bank_accounts WHERE customer_uuid = ? ORDER BY seq";

/// Account store trên SQLite
#[derive(Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    /// Tạo store từ pool có sẵn (schema phải đã được migrate)
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Mở database, tạo file nếu chưa có và chạy migrations
    pub async fn connect(database_url: &str) -> PersistenceResult<Self> {
        let pool = init_database(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Get SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> PersistenceResult<Option<Account>> {
        sqlx::query_as::<_, AccountRow>(SELECT_BY_UUID)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?
            .map(AccountRow::into_account)
            .transpose()
    }

    pub async fn get_by_customer(&self, customer_uuid: &str) -> PersistenceResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(SELECT_BY_CUSTOMER)
            .bind(customer_uuid)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(AccountRow::into_account).collect()
    }

    /// Insert account mới rồi đọc lại danh sách của customer trong cùng transaction
    pub async fn insert(&self, request: NewAccount) -> PersistenceResult<Vec<Account>> {
        let account = Account::open(request);
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO bank_accounts (uuid, customer_uuid, balance, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&account.uuid)
        .bind(&account.customer_uuid)
        .bind(account.balance.to_string())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let rows = sqlx::query_as::<Sqlite, AccountRow>(SELECT_BY_CUSTOMER)
            .bind(&account.customer_uuid)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(account_id = %account.uuid, "account row inserted");

        rows.into_iter().map(AccountRow::into_account).collect()
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn find_by_uuid(&self, uuid: &str) -> CoreResult<Option<Account>> {
        Ok(self.get_by_uuid(uuid).await?)
    }

    async fn find_by_customer_uuid(&self, customer_uuid: &str) -> CoreResult<Vec<Account>> {
        Ok(self.get_by_customer(customer_uuid).await?)
    }

    async fn add_new(&self, request: NewAccount) -> CoreResult<Vec<Account>> {
        Ok(self.insert(request).await?)
    }
}

// ============================================================================
// Database initialization
// ============================================================================

/// Chạy migrations
pub async fn run_migrations(pool: &SqlitePool) -> PersistenceResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Tạo database mới với schema
pub async fn init_database(database_url: &str) -> PersistenceResult<SqlitePool> {
    // Tạo file nếu chưa có
    let pool = SqlitePool::connect_with(
        database_url
            .parse::<SqliteConnectOptions>()?
            .create_if_missing(true),
    )
    .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}
