use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::service::{LoginRequest, LoginResponse};
use crate::gateway::types::error_codes;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Login with account number and password
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LoginResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    match state.auth.login(req).await {
        Ok(resp) => Ok((StatusCode::OK, Json(ApiResponse::success(resp)))),
        Err(e) => {
            tracing::warn!("Login failed: {:?}", e);
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::error(
                    error_codes::AUTH_FAILED,
                    "Invalid account number or password",
                )),
            ))
        }
    }
}
