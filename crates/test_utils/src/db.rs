//! Persistence oracle over the payment backend's database.
//!
//! The backend writes three tables: `order_entity` (one row per accepted
//! order), plus `payment_entity` / `credit_request_entity` carrying the
//! status the bank returned for the respective flow. The suite only ever
//! reads them back and wipes them between scenarios.

use sqlx::{postgres::PgPoolOptions, PgPool};

pub struct StoreOracle {
    pool: PgPool,
}

impl StoreOracle {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        // one scenario runs at a time, one connection is enough
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wipes every table the backend writes to, so scenarios stay isolated.
    pub async fn clear(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM payment_entity")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM credit_request_entity")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM order_entity")
            .execute(&self.pool)
            .await?;
        tracing::debug!("cleared payment, credit and order tables");
        Ok(())
    }

    /// Status of the latest direct-payment row.
    pub async fn payment_status(&self) -> Result<String, sqlx::Error> {
        sqlx::query_scalar("SELECT status FROM payment_entity ORDER BY created DESC LIMIT 1")
            .fetch_one(&self.pool)
            .await
    }

    /// Status of the latest credit-request row.
    pub async fn credit_status(&self) -> Result<String, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT status FROM credit_request_entity ORDER BY created DESC LIMIT 1",
        )
        .fetch_one(&self.pool)
        .await
    }

    pub async fn order_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM order_entity")
            .fetch_one(&self.pool)
            .await
    }
}
