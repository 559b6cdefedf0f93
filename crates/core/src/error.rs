//! Error types cho core library

use thiserror::Error;

/// Custom error type cho core library
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Internal(String),
}

/// Result type alias sử dụng CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Kiểm tra có phải lỗi not found không
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }

    /// Lỗi do dữ liệu client gửi lên
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::NotFound(_) | CoreError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::NotFound("123".to_string());
        assert_eq!(err.to_string(), "Account not found: 123");

        let err = CoreError::InvalidInput("balance must not be negative".to_string());
        assert_eq!(err.to_string(), "Invalid input: balance must not be negative");
    }

    #[test]
    fn test_error_checks() {
        assert!(CoreError::NotFound("x".into()).is_not_found());
        assert!(CoreError::InvalidInput("x".into()).is_client_error());
        assert!(!CoreError::Internal("disk".into()).is_client_error());
    }
}
