//! Append-only ledger of completed transfers

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// A completed transfer, as recorded in the ledger.
///
/// Rows are immutable once written; there is no update or delete path.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct TransferRecord {
    pub id: i64,
    pub from_account: i64,
    pub to_account: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Transfer ledger repository
pub struct TransferLedger;

impl TransferLedger {
    /// Append a transfer record.
    ///
    /// Generic over the executor so the append can join the transfer
    /// transaction instead of committing on its own.
    pub async fn append<'e, E>(
        executor: E,
        from_account: i64,
        to_account: i64,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        sqlx::query(
            r#"INSERT INTO transfer (from_account, to_account, amount, created_at)
               VALUES ($1, $2, $3, $4)"#,
        )
        .bind(from_account)
        .bind(to_account)
        .bind(amount)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Transfers where the given account number is either side, newest first
    pub async fn history_for(
        pool: &PgPool,
        number: i64,
    ) -> Result<Vec<TransferRecord>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT id, from_account, to_account, amount, created_at
               FROM transfer
               WHERE from_account = $1 OR to_account = $1
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(number)
        .fetch_all(pool)
        .await
    }
}
