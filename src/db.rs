//! Storage escape hatch
//!
//! A direct data-store connection used only for hard-delete teardown. It
//! bypasses the write API and its invariants entirely: referential
//! integrity checks are switched off for the session, the row is deleted,
//! and checks are switched back on. Rows referencing the identity
//! (requests, comments, posts) are left behind, so this is a test-only
//! hatch, never the default teardown path — prefer
//! [`ApiClient::disable_user`](crate::ApiClient::disable_user).

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::error::Result;

/// Handle on the service's backing store
pub struct StoreHandle {
    pool: MySqlPool,
}

impl StoreHandle {
    /// Connect to the backing store
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Hard-delete an identity row
    ///
    /// Foreign-key enforcement is session-scoped, so all three statements
    /// run on the same connection. Checks are restored even when the
    /// delete itself fails.
    pub async fn hard_delete_user(&self, user_id: i64) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("SET FOREIGN_KEY_CHECKS = 0")
            .execute(&mut *conn)
            .await?;

        let deleted = sqlx::query("DELETE FROM users WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *conn)
            .await;

        sqlx::query("SET FOREIGN_KEY_CHECKS = 1")
            .execute(&mut *conn)
            .await?;

        let result = deleted?;
        if result.rows_affected() == 0 {
            warn!(user_id, "hard delete matched no row");
        } else {
            info!(user_id, "hard-deleted user row");
        }
        Ok(())
    }
}
