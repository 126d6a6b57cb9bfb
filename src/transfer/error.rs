//! Transfer error types

use thiserror::Error;

/// Transfer error types
///
/// `InsufficientFunds` is an expected business rejection, not a system
/// failure; callers surface it as a structured response, never a generic 5xx.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Source and destination account cannot be the same")]
    SameAccount,

    #[error("Account with number [{0}] not found")]
    AccountNotFound(i64),

    #[error("Not enough money to do the transfer (available {available}, requested {requested})")]
    InsufficientFunds { available: i64, requested: i64 },

    #[error("Transfer source does not match the authenticated account")]
    Forbidden,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            TransferError::Forbidden => "FORBIDDEN",
            TransferError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount | TransferError::SameAccount => 400,
            TransferError::Forbidden => 403,
            TransferError::AccountNotFound(_) => 404,
            TransferError::InsufficientFunds { .. } => 422,
            TransferError::Storage(_) => 500,
        }
    }
}

impl From<sqlx::Error> for TransferError {
    fn from(e: sqlx::Error) -> Self {
        TransferError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::InvalidAmount.code(), "INVALID_AMOUNT");
        assert_eq!(TransferError::SameAccount.code(), "SAME_ACCOUNT");
        assert_eq!(TransferError::AccountNotFound(42).code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(
            TransferError::InsufficientFunds {
                available: 300,
                requested: 400
            }
            .code(),
            "INSUFFICIENT_FUNDS"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
        assert_eq!(TransferError::SameAccount.http_status(), 400);
        assert_eq!(TransferError::Forbidden.http_status(), 403);
        assert_eq!(TransferError::AccountNotFound(1).http_status(), 404);
        assert_eq!(
            TransferError::InsufficientFunds {
                available: 0,
                requested: 1
            }
            .http_status(),
            422
        );
        assert_eq!(TransferError::Storage("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_display_names_the_missing_account() {
        let err = TransferError::AccountNotFound(254245);
        assert!(err.to_string().contains("254245"));
    }

    #[test]
    fn test_insufficient_funds_carries_amounts() {
        let err = TransferError::InsufficientFunds {
            available: 300,
            requested: 400,
        };
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("400"));
    }
}
