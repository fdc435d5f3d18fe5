//! Database row types and their conversion to domain types.

use sqlx::FromRow;

use payment_groups_types::{PaymentGroup, PaymentGroupId, RepoError};

/// Payment group row as stored by SQLite (timestamps as RFC 3339 text).
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct SqliteGroupRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payment group row as stored by PostgreSQL.
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct PgGroupRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "sqlite")]
fn parse_timestamp(s: &str) -> Result<chrono::DateTime<chrono::Utc>, RepoError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| RepoError::Database(format!("Invalid timestamp {:?}: {}", s, e)))
}

#[cfg(feature = "sqlite")]
impl SqliteGroupRow {
    /// Convert database row to domain PaymentGroup.
    pub fn into_domain(self) -> Result<PaymentGroup, RepoError> {
        Ok(PaymentGroup::from_parts(
            PaymentGroupId::new(self.id),
            self.name,
            self.description,
            parse_timestamp(&self.created_at)?,
            parse_timestamp(&self.updated_at)?,
        ))
    }
}

#[cfg(feature = "postgres")]
impl PgGroupRow {
    /// Convert database row to domain PaymentGroup.
    pub fn into_domain(self) -> PaymentGroup {
        PaymentGroup::from_parts(
            PaymentGroupId::new(self.id),
            self.name,
            self.description,
            self.created_at,
            self.updated_at,
        )
    }
}
