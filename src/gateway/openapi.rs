//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::{LoginRequest, LoginResponse};
use crate::gateway::types::{
    AccountData, CreateAccountRequest, DeletedData, HealthData, TransferRequest,
};
use crate::transfer::{TransferReceipt, TransferRecord};

/// JWT bearer-token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rustbank API",
        version = "1.0.0",
        description = "A small banking REST service: accounts, JWT auth, atomic transfers.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::auth::handlers::login,
        crate::gateway::handlers::create_account,
        crate::gateway::handlers::list_accounts,
        crate::gateway::handlers::get_account,
        crate::gateway::handlers::delete_account,
        crate::gateway::handlers::create_transfer,
        crate::gateway::handlers::list_transfers,
    ),
    components(
        schemas(
            HealthData,
            LoginRequest,
            LoginResponse,
            CreateAccountRequest,
            AccountData,
            DeletedData,
            TransferRequest,
            TransferReceipt,
            TransferRecord,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Health checks and system info"),
        (name = "Auth", description = "Login and token issuance"),
        (name = "Account", description = "Account management"),
        (name = "Transfer", description = "Money movement between accounts (auth required)")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "rustbank API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/auth/login"));
        assert!(paths.paths.contains_key("/api/v1/accounts"));
        assert!(paths.paths.contains_key("/api/v1/accounts/{id}"));
        assert!(paths.paths.contains_key("/api/v1/transfer"));
        assert!(paths.paths.contains_key("/api/v1/transfers"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
