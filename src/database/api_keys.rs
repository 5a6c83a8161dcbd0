// ABOUTME: API key storage operations
// ABOUTME: Keys are looked up by SHA-256 hash; raw keys are never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use bakebase_core::errors::{AppError, AppResult};
use bakebase_core::models::ApiKey;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use super::Database;

impl Database {
    /// Create the API key table
    pub(super) async fn migrate_api_keys(&self) -> AppResult<()> {
        self.execute_ddl(
            r"
            CREATE TABLE IF NOT EXISTS api_keys (
                id TEXT PRIMARY KEY,
                key_prefix TEXT NOT NULL,
                key_hash TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL,
                expires_at TEXT,
                last_used_at TEXT,
                revoked_at TEXT
            )
            ",
        )
        .await?;
        self.execute_ddl("CREATE INDEX IF NOT EXISTS idx_api_keys_hash ON api_keys(key_hash)")
            .await
    }

    /// Store a newly provisioned API key
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_api_key(&self, api_key: &ApiKey) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO api_keys (id, key_prefix, key_hash, created_at, expires_at, last_used_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&api_key.id)
        .bind(&api_key.key_prefix)
        .bind(&api_key.key_hash)
        .bind(api_key.created_at)
        .bind(api_key.expires_at)
        .bind(api_key.last_used_at)
        .bind(api_key.revoked_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create API key: {e}")))?;

        debug!(key.id = %api_key.id, key.prefix = %api_key.key_prefix, "Stored API key");
        Ok(())
    }

    /// Look up an API key by the hash of the raw key
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_api_key_by_hash(&self, key_hash: &str) -> AppResult<Option<ApiKey>> {
        let row = sqlx::query(
            r"
            SELECT id, key_prefix, key_hash, created_at, expires_at, last_used_at, revoked_at
            FROM api_keys
            WHERE key_hash = $1
            ",
        )
        .bind(key_hash)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get API key by hash: {e}")))?;

        row.as_ref().map(Self::row_to_api_key).transpose()
    }

    /// Record a successful authentication
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn touch_api_key(&self, api_key_id: &str, used_at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE api_keys SET last_used_at = $1 WHERE id = $2")
            .bind(used_at)
            .bind(api_key_id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to update API key last used: {e}")))?;
        Ok(())
    }

    /// Revoke an API key; returns `false` when no active key matched
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn revoke_api_key(
        &self,
        api_key_id: &str,
        revoked_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE api_keys SET revoked_at = $1 WHERE id = $2 AND revoked_at IS NULL",
        )
        .bind(revoked_at)
        .bind(api_key_id)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to revoke API key: {e}")))?;
        Ok(result.rows_affected() > 0)
    }

    fn row_to_api_key(row: &SqliteRow) -> AppResult<ApiKey> {
        let read = |e: sqlx::Error| AppError::database(format!("Failed to read API key row: {e}"));
        Ok(ApiKey {
            id: row.try_get("id").map_err(read)?,
            key_prefix: row.try_get("key_prefix").map_err(read)?,
            key_hash: row.try_get("key_hash").map_err(read)?,
            created_at: row.try_get("created_at").map_err(read)?,
            expires_at: row.try_get("expires_at").map_err(read)?,
            last_used_at: row.try_get("last_used_at").map_err(read)?,
            revoked_at: row.try_get("revoked_at").map_err(read)?,
        })
    }
}
