//! Payment Application Service
//!
//! Exposes payment group operations over the repository port.
//! Contains NO infrastructure logic and NO business rules: every call is a
//! single delegation whose result is returned as the repository produced it.

use payment_groups_types::{
    CreatePaymentGroupRequest, PaymentGroup, PaymentGroupId, PaymentGroupRepository, RepoError,
    UpdatePaymentGroupRequest,
};

/// Application service for payment groups.
///
/// Generic over `R: PaymentGroupRepository` - the adapter is injected at
/// construction, so there is no shared repository instance and tests can
/// substitute their own.
pub struct PaymentService<R: PaymentGroupRepository> {
    repo: R,
}

impl<R: PaymentGroupRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists all payment groups.
    pub async fn list_groups(&self) -> Result<Vec<PaymentGroup>, RepoError> {
        self.repo.find_all().await
    }

    /// Gets a payment group by ID. An absent group is `Ok(None)`.
    pub async fn get_group(&self, id: PaymentGroupId) -> Result<Option<PaymentGroup>, RepoError> {
        self.repo.find_by_id(id).await
    }

    /// Creates a payment group.
    pub async fn create_group(
        &self,
        req: CreatePaymentGroupRequest,
    ) -> Result<PaymentGroup, RepoError> {
        self.repo.create(req).await
    }

    /// Updates a payment group.
    pub async fn update_group(
        &self,
        id: PaymentGroupId,
        req: UpdatePaymentGroupRequest,
    ) -> Result<Option<PaymentGroup>, RepoError> {
        self.repo.update(id, req).await
    }

    /// Removes a payment group.
    pub async fn remove_group(&self, id: PaymentGroupId) -> Result<bool, RepoError> {
        self.repo.delete(id).await
    }
}
