//! REST handlers for accounts and transfers

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::state::AppState;
use super::types::{
    AccountData, ApiResponse, CreateAccountRequest, DeletedData, HealthData, TransferRequest,
    error_codes,
};
use crate::account::{AccountRepository, validate_new_account};
use crate::auth::Claims;
use crate::transfer::{TransferError, TransferLedger, TransferReceipt, TransferRecord};

type HandlerResult<T> =
    Result<(StatusCode, Json<ApiResponse<T>>), (StatusCode, Json<ApiResponse<()>>)>;

fn internal_error(msg: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(error_codes::INTERNAL_ERROR, msg)),
    )
}

/// Health check endpoint
///
/// Pings the database; reports the build identifier and server time.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthData>),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> HandlerResult<HealthData> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.db.health_check().await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(HealthData {
                version: env!("GIT_HASH").to_string(),
                timestamp_ms,
            })),
        )),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<()>::error(
                    error_codes::INTERNAL_ERROR,
                    "unavailable",
                )),
            ))
        }
    }
}

/// Create a new account
///
/// POST /api/v1/accounts
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AccountData>),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> HandlerResult<AccountData> {
    if let Err(e) = validate_new_account(&req.first_name, &req.last_name, &req.password) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                error_codes::INVALID_PARAMETER,
                e.to_string(),
            )),
        ));
    }

    let password_hash = state.auth.hash_password(&req.password).map_err(|e| {
        tracing::error!("Password hashing failed: {:?}", e);
        internal_error("Account creation failed")
    })?;

    match AccountRepository::create(
        state.db.pool(),
        &req.first_name,
        &req.last_name,
        &password_hash,
    )
    .await
    {
        Ok(account) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(AccountData::from(account))),
        )),
        Err(e) => {
            tracing::error!("Account creation failed: {:?}", e);
            Err(internal_error("Account creation failed"))
        }
    }
}

/// List all accounts
///
/// GET /api/v1/accounts
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    responses(
        (status = 200, description = "List of accounts", body = ApiResponse<Vec<AccountData>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> HandlerResult<Vec<AccountData>> {
    match AccountRepository::list(state.db.pool()).await {
        Ok(accounts) => {
            let data = accounts.into_iter().map(AccountData::from).collect();
            Ok((StatusCode::OK, Json(ApiResponse::success(data))))
        }
        Err(e) => {
            tracing::error!("Failed to list accounts: {:?}", e);
            Err(internal_error("Failed to list accounts"))
        }
    }
}

/// Fetch one account by internal ID
///
/// GET /api/v1/accounts/{id}
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    params(
        ("id" = i64, Path, description = "Internal account ID")
    ),
    responses(
        (status = 200, description = "Account found", body = ApiResponse<AccountData>),
        (status = 404, description = "Account not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> HandlerResult<AccountData> {
    match AccountRepository::get_by_id(state.db.pool(), id).await {
        Ok(Some(account)) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(AccountData::from(account))),
        )),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(
                error_codes::ACCOUNT_NOT_FOUND,
                format!("Account with ID {} not found", id),
            )),
        )),
        Err(e) => {
            tracing::error!("Failed to fetch account: {:?}", e);
            Err(internal_error("Failed to fetch account"))
        }
    }
}

/// Delete an account
///
/// DELETE /api/v1/accounts/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    params(
        ("id" = i64, Path, description = "Internal account ID")
    ),
    responses(
        (status = 200, description = "Account deleted", body = ApiResponse<DeletedData>),
        (status = 404, description = "Account not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> HandlerResult<DeletedData> {
    match AccountRepository::delete(state.db.pool(), id).await {
        Ok(true) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(DeletedData { deleted: id })),
        )),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(
                error_codes::ACCOUNT_NOT_FOUND,
                format!("Account with ID {} not found", id),
            )),
        )),
        Err(e) => {
            tracing::error!("Failed to delete account: {:?}", e);
            Err(internal_error("Failed to delete account"))
        }
    }
}

/// Execute a transfer between two accounts
///
/// POST /api/v1/transfer
///
/// The authenticated caller may only move money out of their own account:
/// `from_account` must equal the token's account number.
#[utoipa::path(
    post,
    path = "/api/v1/transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer applied", body = ApiResponse<TransferReceipt>),
        (status = 400, description = "Invalid amount or same-account transfer"),
        (status = 403, description = "Source account does not match caller"),
        (status = 404, description = "Unknown source or destination account"),
        (status = 422, description = "Insufficient funds"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<TransferRequest>,
) -> HandlerResult<TransferReceipt> {
    // Callers move money out of their own account only; the executor itself
    // stays identity-agnostic.
    if claims.account_number != req.from_account {
        tracing::warn!(
            caller = claims.account_number,
            from_account = req.from_account,
            "Transfer source mismatch"
        );
        return Err(transfer_error_response(TransferError::Forbidden));
    }

    match state
        .transfers
        .execute(req.from_account, req.to_account, req.amount)
        .await
    {
        Ok(receipt) => Ok((StatusCode::OK, Json(ApiResponse::success(receipt)))),
        Err(e) => {
            if matches!(e, TransferError::Storage(_)) {
                tracing::error!("Transfer failed: {}", e);
            } else {
                tracing::debug!("Transfer rejected: {}", e);
            }
            Err(transfer_error_response(e))
        }
    }
}

/// Transfer history for the authenticated account
///
/// GET /api/v1/transfers
#[utoipa::path(
    get,
    path = "/api/v1/transfers",
    responses(
        (status = 200, description = "Transfers involving the caller, newest first", body = ApiResponse<Vec<TransferRecord>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfer"
)]
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> HandlerResult<Vec<TransferRecord>> {
    match TransferLedger::history_for(state.db.pool(), claims.account_number).await {
        Ok(records) => Ok((StatusCode::OK, Json(ApiResponse::success(records)))),
        Err(e) => {
            tracing::error!("Failed to list transfers: {:?}", e);
            Err(internal_error("Failed to list transfers"))
        }
    }
}

/// Map a `TransferError` onto the response envelope.
fn transfer_error_response(err: TransferError) -> (StatusCode, Json<ApiResponse<()>>) {
    let code = match &err {
        TransferError::InvalidAmount | TransferError::SameAccount => error_codes::INVALID_PARAMETER,
        TransferError::AccountNotFound(_) => error_codes::ACCOUNT_NOT_FOUND,
        TransferError::InsufficientFunds { .. } => error_codes::INSUFFICIENT_BALANCE,
        TransferError::Forbidden => error_codes::FORBIDDEN,
        TransferError::Storage(_) => error_codes::INTERNAL_ERROR,
    };
    // Storage details stay in the logs
    let msg = match &err {
        TransferError::Storage(_) => "Transfer failed".to_string(),
        _ => err.to_string(),
    };
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiResponse::<()>::error(code, msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_error_mapping() {
        let (status, Json(body)) = transfer_error_response(TransferError::InsufficientFunds {
            available: 300,
            requested: 400,
        });
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, error_codes::INSUFFICIENT_BALANCE);
        assert!(body.msg.contains("300"));

        let (status, Json(body)) = transfer_error_response(TransferError::AccountNotFound(99));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, error_codes::ACCOUNT_NOT_FOUND);

        let (status, Json(body)) = transfer_error_response(TransferError::Forbidden);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.code, error_codes::FORBIDDEN);
    }

    #[test]
    fn test_storage_error_does_not_leak_details() {
        let (status, Json(body)) =
            transfer_error_response(TransferError::Storage("connection refused on 10.0.0.5".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.msg.contains("10.0.0.5"));
    }
}
