//! Payment group domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Integer key identifying a payment group.
///
/// Keys are assigned by the repository on insert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PaymentGroupId(i64);

impl PaymentGroupId {
    /// Wraps a raw key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PaymentGroupId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PaymentGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentGroupId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A persisted payment group record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentGroup {
    /// Repository-assigned key
    pub id: PaymentGroupId,
    /// Display name of the group
    #[schema(example = "Monthly subscriptions")]
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the group was created
    pub created_at: DateTime<Utc>,
    /// When the group was last modified
    pub updated_at: DateTime<Utc>,
}

impl PaymentGroup {
    /// Creates a group with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: PaymentGroupId,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse_and_display() {
        let id: PaymentGroupId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_parse_rejects_non_numeric() {
        assert!("abc".parse::<PaymentGroupId>().is_err());
        assert!("".parse::<PaymentGroupId>().is_err());
        assert!(" 5".parse::<PaymentGroupId>().is_err());
        assert!("5 ".parse::<PaymentGroupId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&PaymentGroupId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_group_omits_missing_description() {
        let now = Utc::now();
        let group = PaymentGroup::from_parts(
            PaymentGroupId::new(1),
            "Payroll".to_string(),
            None,
            now,
            now,
        );

        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Payroll");
        assert!(value.get("description").is_none());
    }
}
