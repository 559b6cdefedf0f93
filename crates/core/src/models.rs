//! Models/Entities của ứng dụng

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Tài khoản ngân hàng.
///
/// JSON dùng các key `uuid`, `customerUuid`, `balance`. `balance` được ghi
/// ra dạng number với đúng phần thập phân của `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// ID do store cấp khi tạo, không đổi về sau
    pub uuid: String,
    /// ID của customer sở hữu account
    pub customer_uuid: String,
    /// Số dư, luôn >= 0
    #[serde(with = "exact_decimal")]
    pub balance: Decimal,
}

impl Account {
    /// Tạo account với id cho trước
    pub fn new(
        uuid: impl Into<String>,
        customer_uuid: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            customer_uuid: customer_uuid.into(),
            balance,
        }
    }

    /// Mở account mới từ request, cấp UUID v4
    pub fn open(request: NewAccount) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            customer_uuid: request.customer_uuid,
            balance: request.balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (customer: {}, balance: {})",
            self.uuid, self.customer_uuid, self.balance
        )
    }
}

/// Serde cho `Decimal`: ghi ra JSON number giữ nguyên phần thập phân,
/// đọc vào từ number hoặc string và báo lỗi nếu giá trị không biểu diễn
/// chính xác được (ví dụ hơn 28 chữ số thập phân) thay vì làm tròn.
mod exact_decimal {
    use rust_decimal::Decimal;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;
    use serde_json::Value;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::arbitrary_precision::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            other => {
                return Err(de::Error::custom(format!(
                    "expected a decimal number, got {other}"
                )))
            }
        };
        parse_exact(text.trim()).map_err(de::Error::custom)
    }

    pub(super) fn parse_exact(text: &str) -> Result<Decimal, String> {
        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(text)
        } else {
            Decimal::from_str_exact(text)
        };
        parsed.map_err(|e| format!("{text} is not an exact decimal amount: {e}"))
    }
}

/// Request tạo account: `{customerUuid, balance}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub customer_uuid: String,
    #[serde(with = "exact_decimal")]
    pub balance: Decimal,
}

impl NewAccount {
    pub fn new(customer_uuid: impl Into<String>, balance: Decimal) -> Self {
        Self {
            customer_uuid: customer_uuid.into(),
            balance,
        }
    }

    /// Kiểm tra customer id không rỗng và balance không âm
    pub fn validate(&self) -> CoreResult<()> {
        if self.customer_uuid.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "customerUuid is required".to_string(),
            ));
        }
        if self.balance < Decimal::ZERO {
            return Err(CoreError::InvalidInput(format!(
                "balance must not be negative, got {}",
                self.balance
            )));
        }
        Ok(())
    }
}
