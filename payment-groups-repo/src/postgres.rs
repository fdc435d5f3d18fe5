//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use payment_groups_types::{
    CreatePaymentGroupRequest, PaymentGroup, PaymentGroupId, PaymentGroupRepository, RepoError,
    UpdatePaymentGroupRequest,
};

use crate::types::PgGroupRow;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_payment_groups_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        tracing::debug!("PostgreSQL repository ready");
        Ok(Self { pool })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentGroupRepository for PostgresRepo {
    async fn find_all(&self) -> Result<Vec<PaymentGroup>, RepoError> {
        let rows: Vec<PgGroupRow> = sqlx::query_as(
            r#"SELECT id, name, description, created_at, updated_at FROM payment_groups ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(PgGroupRow::into_domain).collect())
    }

    async fn find_by_id(&self, id: PaymentGroupId) -> Result<Option<PaymentGroup>, RepoError> {
        let row: Option<PgGroupRow> = sqlx::query_as(
            r#"SELECT id, name, description, created_at, updated_at FROM payment_groups WHERE id = $1"#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(PgGroupRow::into_domain))
    }

    async fn create(&self, req: CreatePaymentGroupRequest) -> Result<PaymentGroup, RepoError> {
        let row: PgGroupRow = sqlx::query_as(
            r#"INSERT INTO payment_groups (name, description)
               VALUES ($1, $2)
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn update(
        &self,
        id: PaymentGroupId,
        req: UpdatePaymentGroupRequest,
    ) -> Result<Option<PaymentGroup>, RepoError> {
        let row: Option<PgGroupRow> = sqlx::query_as(
            r#"UPDATE payment_groups
               SET name = COALESCE($1, name),
                   description = COALESCE($2, description),
                   updated_at = NOW()
               WHERE id = $3
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(PgGroupRow::into_domain))
    }

    async fn delete(&self, id: PaymentGroupId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payment_groups WHERE id = $1"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
