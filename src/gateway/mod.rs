pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::AuthService;
use crate::config::AppConfig;
use crate::db::Database;
use crate::transfer::TransferExecutor;
use state::AppState;

/// Start the HTTP server
pub async fn run_server(config: &AppConfig, db: Arc<Database>) {
    let auth = Arc::new(AuthService::new(
        db.pool().clone(),
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_hours,
    ));
    let transfers = TransferExecutor::new(db.pool().clone());

    let state = Arc::new(AppState::new(db, auth, transfers));

    // ==========================================================================
    // Public routes (no auth required)
    // ==========================================================================
    let auth_routes = Router::new().route("/login", post(crate::auth::handlers::login));

    let public_routes = Router::new().route("/accounts", post(handlers::create_account));

    // ==========================================================================
    // Protected routes (JWT required)
    // ==========================================================================
    let protected_routes = Router::new()
        .route("/accounts", get(handlers::list_accounts))
        .route(
            "/accounts/{id}",
            get(handlers::get_account).delete(handlers::delete_account),
        )
        .route("/transfer", post(handlers::create_transfer))
        .route("/transfers", get(handlers::list_transfers))
        .layer(from_fn_with_state(
            state.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    let app = Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1", public_routes.merge(protected_routes))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
