//! Data models for customer accounts

use chrono::{DateTime, Utc};

/// Customer account
///
/// `number` is the public routing identifier, distinct from the internal
/// `id`. `balance` is in the smallest currency unit. The password hash never
/// leaves the service; response DTOs live in `gateway::types`.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub password_hash: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}
