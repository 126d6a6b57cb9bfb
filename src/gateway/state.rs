use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::Database;
use crate::transfer::TransferExecutor;

/// Shared application state
pub struct AppState {
    /// PostgreSQL database (accounts + transfer ledger)
    pub db: Arc<Database>,
    /// Password + token authentication
    pub auth: Arc<AuthService>,
    /// The balance-moving core
    pub transfers: TransferExecutor,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthService>, transfers: TransferExecutor) -> Self {
        Self {
            db,
            auth,
            transfers,
        }
    }
}
