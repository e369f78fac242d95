//! User domain entity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

use crate::domain::BloodType;
use crate::shared::rule_violation;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Donor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Donor => "DONOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "DONOR" => Ok(Self::Donor),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// `validator` hook for request fields carrying a role code.
pub fn validate_role_code(value: &str) -> Result<(), ValidationError> {
    value.parse::<Role>().map(|_| ()).map_err(|_| {
        rule_violation(
            "role",
            format!(
                "Invalid role: The validated role '{}' must be in proper format",
                value
            ),
        )
    })
}

/// Registered user (donor or admin)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub blood_type: BloodType,
}

/// User about to be persisted; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub blood_type: BloodType,
}

impl NewUser {
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            blood_type: self.blood_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_codes_are_uppercase() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("DONOR".parse::<Role>(), Ok(Role::Donor));
        assert!("admin".parse::<Role>().is_err());
        assert_eq!(serde_json::to_string(&Role::Donor).unwrap(), "\"DONOR\"");
    }

    #[test]
    fn role_violation_mentions_value() {
        let err = validate_role_code("GUEST").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Invalid role: The validated role 'GUEST' must be in proper format")
        );
    }
}
