//! Customer account management
//!
//! Accounts are keyed two ways: `id` is the internal primary key, `number`
//! is the public routing identifier counterparties use in transfers.

pub mod models;
pub mod repository;
pub mod validation;

pub use models::Account;
pub use repository::AccountRepository;
pub use validation::{ValidationError, validate_new_account};
