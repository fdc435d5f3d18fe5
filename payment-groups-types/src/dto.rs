//! Data Transfer Objects (DTOs) for requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new payment group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentGroupRequest {
    /// Display name of the group
    #[schema(example = "Monthly subscriptions")]
    pub name: String,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to modify an existing payment group.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentGroupRequest {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Quarterly subscriptions")]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_accepts_empty_object() {
        let req: UpdatePaymentGroupRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, UpdatePaymentGroupRequest::default());
    }

    #[test]
    fn test_create_request_description_is_optional() {
        let req: CreatePaymentGroupRequest =
            serde_json::from_str(r#"{"name": "Vendors"}"#).unwrap();
        assert_eq!(req.name, "Vendors");
        assert_eq!(req.description, None);
    }
}
