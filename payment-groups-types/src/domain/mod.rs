//! Domain models for the payment groups service.

pub mod payment_group;

pub use payment_group::{PaymentGroup, PaymentGroupId};
