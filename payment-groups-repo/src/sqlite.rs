//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use payment_groups_types::{
    CreatePaymentGroupRequest, PaymentGroup, PaymentGroupId, PaymentGroupRepository, RepoError,
    UpdatePaymentGroupRequest,
};

use crate::types::SqliteGroupRow;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        tracing::debug!("SQLite repository ready");

        Ok(repo)
    }

    /// Wraps an existing pool. Call [`SqliteRepo::create_schema`] before use.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the database schema.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_payment_groups.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentGroupRepository for SqliteRepo {
    async fn find_all(&self) -> Result<Vec<PaymentGroup>, RepoError> {
        let rows: Vec<SqliteGroupRow> = sqlx::query_as(
            r#"SELECT id, name, description, created_at, updated_at FROM payment_groups ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(SqliteGroupRow::into_domain).collect()
    }

    async fn find_by_id(&self, id: PaymentGroupId) -> Result<Option<PaymentGroup>, RepoError> {
        let row: Option<SqliteGroupRow> = sqlx::query_as(
            r#"SELECT id, name, description, created_at, updated_at FROM payment_groups WHERE id = ?"#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(SqliteGroupRow::into_domain).transpose()
    }

    async fn create(&self, req: CreatePaymentGroupRequest) -> Result<PaymentGroup, RepoError> {
        let now = chrono::Utc::now().to_rfc3339();

        let row: SqliteGroupRow = sqlx::query_as(
            r#"INSERT INTO payment_groups (name, description, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.into_domain()
    }

    async fn update(
        &self,
        id: PaymentGroupId,
        req: UpdatePaymentGroupRequest,
    ) -> Result<Option<PaymentGroup>, RepoError> {
        let now = chrono::Utc::now().to_rfc3339();

        let row: Option<SqliteGroupRow> = sqlx::query_as(
            r#"UPDATE payment_groups
               SET name = COALESCE(?, name),
                   description = COALESCE(?, description),
                   updated_at = ?
               WHERE id = ?
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&now)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(SqliteGroupRow::into_domain).transpose()
    }

    async fn delete(&self, id: PaymentGroupId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payment_groups WHERE id = ?"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
