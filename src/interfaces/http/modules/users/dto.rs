//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{BloodType, RegisterUserDto, Role, User};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub blood_type: BloodType,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            role: u.role,
            blood_type: u.blood_type,
        }
    }
}

/// Registration request. Role and blood type arrive as codes and are
/// checked together with the other fields.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Kovac")]
    pub last_name: String,
    #[schema(example = "ana.kovac@example.com")]
    pub email: String,
    #[schema(example = "DONOR")]
    pub role: String,
    #[schema(example = "ABNeg")]
    pub blood_type: String,
}

impl From<RegisterUserRequest> for RegisterUserDto {
    fn from(r: RegisterUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            role: r.role,
            blood_type: r.blood_type,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EmailQuery {
    /// Registered email address
    pub email: String,
}
