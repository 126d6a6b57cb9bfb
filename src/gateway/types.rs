//! Request/response types for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::account::Account;

/// Uniform API response envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Numeric error codes used in the response envelope
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_BALANCE: i32 = 1002;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;
    pub const FORBIDDEN: i32 = 2003;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4001;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Create account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = "Grace")]
    pub first_name: String,
    #[schema(example = "Hopper")]
    pub last_name: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Transfer request
///
/// `from_account` must match the authenticated caller's account number.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequest {
    #[schema(example = 254245)]
    pub from_account: i64,
    #[schema(example = 869347)]
    pub to_account: i64,
    /// Amount in the smallest currency unit
    #[schema(example = 200)]
    pub amount: i64,
}

/// Account response data (the password hash never leaves the service)
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountData {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            number: account.number,
            balance: account.balance,
            created_at: account.created_at,
        }
    }
}

/// Delete account response data
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedData {
    pub deleted: i64,
}

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    /// Build identifier embedded at compile time
    pub version: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let resp = ApiResponse::<()>::error(error_codes::INSUFFICIENT_BALANCE, "not enough money");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 1002);
        assert!(json.get("data").is_none(), "data must be skipped on error");
    }

    #[test]
    fn test_account_data_hides_password_hash() {
        let account = Account {
            id: 1,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            number: 254245,
            password_hash: "argon2-secret".to_string(),
            balance: 500,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&AccountData::from(account)).unwrap();
        assert!(!json.contains("argon2-secret"));
        assert!(json.contains("254245"));
    }

    #[test]
    fn test_transfer_request_deserializes() {
        let json = r#"{"from_account":254245,"to_account":869347,"amount":200}"#;
        let req: TransferRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.from_account, 254245);
        assert_eq!(req.to_account, 869347);
        assert_eq!(req.amount, 200);
    }
}
