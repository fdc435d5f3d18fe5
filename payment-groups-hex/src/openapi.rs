//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payment_groups_types::domain::{PaymentGroup, PaymentGroupId};
use payment_groups_types::dto::{CreatePaymentGroupRequest, UpdatePaymentGroupRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all payment groups
#[utoipa::path(
    get,
    path = "/api/payment-groups",
    tag = "payment-groups",
    responses(
        (status = 200, description = "All payment groups in repository order", body = Vec<PaymentGroup>)
    )
)]
async fn list_groups() {}

/// Create a payment group
#[utoipa::path(
    post,
    path = "/api/payment-groups",
    tag = "payment-groups",
    request_body = CreatePaymentGroupRequest,
    responses(
        (status = 201, description = "Payment group created", body = PaymentGroup)
    )
)]
async fn create_group() {}

/// Get a payment group by ID
#[utoipa::path(
    get,
    path = "/api/payment-groups/{id}",
    tag = "payment-groups",
    params(
        ("id" = i64, Path, description = "Payment group ID")
    ),
    responses(
        (status = 200, description = "Payment group found", body = PaymentGroup),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Payment group not found")
    )
)]
async fn get_group() {}

/// Update a payment group
#[utoipa::path(
    put,
    path = "/api/payment-groups/{id}",
    tag = "payment-groups",
    request_body = UpdatePaymentGroupRequest,
    params(
        ("id" = i64, Path, description = "Payment group ID")
    ),
    responses(
        (status = 200, description = "Payment group updated", body = PaymentGroup),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Payment group not found")
    )
)]
async fn update_group() {}

/// Delete a payment group
#[utoipa::path(
    delete,
    path = "/api/payment-groups/{id}",
    tag = "payment-groups",
    params(
        ("id" = i64, Path, description = "Payment group ID")
    ),
    responses(
        (status = 204, description = "Payment group deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Payment group not found")
    )
)]
async fn remove_group() {}

/// OpenAPI documentation for the Payment Groups API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Groups Service API",
        version = "1.0.0",
        description = "CRUD operations over payment groups.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_groups,
        create_group,
        get_group,
        update_group,
        remove_group,
    ),
    components(
        schemas(
            PaymentGroup,
            PaymentGroupId,
            CreatePaymentGroupRequest,
            UpdatePaymentGroupRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payment-groups", description = "Payment group management"),
    )
)]
pub struct ApiDoc;
