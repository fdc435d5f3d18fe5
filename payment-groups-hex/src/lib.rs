//! # Payment Groups Hex
//!
//! Application service layer and HTTP adapter for the payment groups service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (delegates to the repository port)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the HTTP adapter
//!
//! The service is generic over `R: PaymentGroupRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::PaymentService;
