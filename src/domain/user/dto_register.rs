use validator::{Validate, ValidationError};

use super::model::validate_role_code;
use crate::domain::blood_type::validate_blood_type_code;
use crate::shared::{require_non_empty, DatedRequest};

#[derive(Debug, Clone, Validate)]
pub struct RegisterUserDto {
    #[validate(
        custom(function = "first_name_present"),
        length(
            min = 2,
            max = 32,
            message = "Invalid first name: Must be between 2 and 32 characters long"
        )
    )]
    pub first_name: String,
    #[validate(
        custom(function = "last_name_present"),
        length(
            min = 2,
            max = 32,
            message = "Invalid last name: Must be between 2 and 32 characters long"
        )
    )]
    pub last_name: String,
    #[validate(custom(function = "email_is_valid"))]
    pub email: String,
    #[validate(custom(function = "validate_role_code"))]
    pub role: String,
    #[validate(custom(function = "validate_blood_type_code"))]
    pub blood_type: String,
}

impl DatedRequest for RegisterUserDto {}

fn first_name_present(value: &str) -> Result<(), ValidationError> {
    require_non_empty(value, "Invalid first name: Empty first name")
}

fn last_name_present(value: &str) -> Result<(), ValidationError> {
    require_non_empty(value, "Invalid last name: Empty last name")
}

fn email_is_valid(value: &str) -> Result<(), ValidationError> {
    use validator::ValidateEmail;

    if value.validate_email() {
        Ok(())
    } else {
        Err(crate::shared::rule_violation(
            "email",
            format!(
                "Invalid email: Entered email '{}' must be existing email address",
                value
            ),
        ))
    }
}
