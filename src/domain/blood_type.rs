//! ABO group × Rh factor

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

use crate::shared::rule_violation;

pub const INVALID_BLOOD_TYPE_MESSAGE: &str = "Invalid blood type: \
     Must start with capital letter for group followed by Pos or Neg Ex: APos, ANeg...";

/// One of the eight ABO/Rh combinations, encoded as `APos`, `ABNeg`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum BloodType {
    APos,
    ANeg,
    BPos,
    BNeg,
    ABPos,
    ABNeg,
    OPos,
    ONeg,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        Self::APos,
        Self::ANeg,
        Self::BPos,
        Self::BNeg,
        Self::ABPos,
        Self::ABNeg,
        Self::OPos,
        Self::ONeg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APos => "APos",
            Self::ANeg => "ANeg",
            Self::BPos => "BPos",
            Self::BNeg => "BNeg",
            Self::ABPos => "ABPos",
            Self::ABNeg => "ABNeg",
            Self::OPos => "OPos",
            Self::ONeg => "ONeg",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBloodType(pub String);

impl fmt::Display for UnknownBloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown blood type '{}'", self.0)
    }
}

impl std::error::Error for UnknownBloodType {}

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bt| bt.as_str() == s)
            .ok_or_else(|| UnknownBloodType(s.to_string()))
    }
}

/// `validator` hook for request fields carrying a blood type code.
pub fn validate_blood_type_code(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<BloodType>()
        .map(|_| ())
        .map_err(|_| rule_violation("blood_type", INVALID_BLOOD_TYPE_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back() {
        for bt in BloodType::ALL {
            assert_eq!(bt.as_str().parse::<BloodType>(), Ok(bt));
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["apos", "A+", "APOS", "AB", "", "ABpos", "CPos"] {
            assert!(code.parse::<BloodType>().is_err(), "{code} should be rejected");
            assert!(validate_blood_type_code(code).is_err());
        }
    }

    #[test]
    fn serializes_as_wire_code() {
        assert_eq!(serde_json::to_string(&BloodType::ABNeg).unwrap(), "\"ABNeg\"");
    }
}
