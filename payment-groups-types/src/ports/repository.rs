//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite) implement this trait.

use crate::domain::{PaymentGroup, PaymentGroupId};
use crate::dto::{CreatePaymentGroupRequest, UpdatePaymentGroupRequest};
use crate::error::RepoError;

/// Persistence port for payment groups.
///
/// Adapters own storage, key assignment and ordering. Callers get back
/// exactly what the adapter produced.
#[async_trait::async_trait]
pub trait PaymentGroupRepository: Send + Sync + 'static {
    /// Returns every stored group, in repository order.
    async fn find_all(&self) -> Result<Vec<PaymentGroup>, RepoError>;

    /// Looks up a group by key. `None` when absent.
    async fn find_by_id(&self, id: PaymentGroupId) -> Result<Option<PaymentGroup>, RepoError>;

    /// Inserts a new group and returns the stored record.
    async fn create(&self, req: CreatePaymentGroupRequest) -> Result<PaymentGroup, RepoError>;

    /// Applies `req` to the group with key `id`. `None` when absent.
    async fn update(
        &self,
        id: PaymentGroupId,
        req: UpdatePaymentGroupRequest,
    ) -> Result<Option<PaymentGroup>, RepoError>;

    /// Deletes the group with key `id`; returns whether a row was removed.
    async fn delete(&self, id: PaymentGroupId) -> Result<bool, RepoError>;
}
