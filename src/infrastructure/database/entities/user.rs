//! User entity for database

use sea_orm::entity::prelude::*;

use crate::domain::{BloodType, Role};

/// Stored role code
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum UserRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "DONOR")]
    Donor,
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Donor => Self::Donor,
        }
    }
}

impl From<UserRole> for Role {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Donor => Self::Donor,
        }
    }
}

/// Stored blood type code, shared by users and donation events
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum BloodTypeCode {
    #[sea_orm(string_value = "APos")]
    APos,
    #[sea_orm(string_value = "ANeg")]
    ANeg,
    #[sea_orm(string_value = "BPos")]
    BPos,
    #[sea_orm(string_value = "BNeg")]
    BNeg,
    #[sea_orm(string_value = "ABPos")]
    ABPos,
    #[sea_orm(string_value = "ABNeg")]
    ABNeg,
    #[sea_orm(string_value = "OPos")]
    OPos,
    #[sea_orm(string_value = "ONeg")]
    ONeg,
}

impl From<BloodType> for BloodTypeCode {
    fn from(bt: BloodType) -> Self {
        match bt {
            BloodType::APos => Self::APos,
            BloodType::ANeg => Self::ANeg,
            BloodType::BPos => Self::BPos,
            BloodType::BNeg => Self::BNeg,
            BloodType::ABPos => Self::ABPos,
            BloodType::ABNeg => Self::ABNeg,
            BloodType::OPos => Self::OPos,
            BloodType::ONeg => Self::ONeg,
        }
    }
}

impl From<BloodTypeCode> for BloodType {
    fn from(code: BloodTypeCode) -> Self {
        match code {
            BloodTypeCode::APos => Self::APos,
            BloodTypeCode::ANeg => Self::ANeg,
            BloodTypeCode::BPos => Self::BPos,
            BloodTypeCode::BNeg => Self::BNeg,
            BloodTypeCode::ABPos => Self::ABPos,
            BloodTypeCode::ABNeg => Self::ABNeg,
            BloodTypeCode::OPos => Self::OPos,
            BloodTypeCode::ONeg => Self::ONeg,
        }
    }
}

/// User model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: UserRole,
    pub blood_type: BloodTypeCode,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
