//! Password + bearer-token authentication
//!
//! Passwords are hashed with argon2id; sessions are HS256 JWTs whose signing
//! key comes from `AuthConfig`, threaded through `AuthService::new`.

pub mod handlers;
pub mod middleware;
pub mod service;

pub use service::{AuthService, Claims, LoginRequest, LoginResponse};
