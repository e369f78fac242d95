use validator::Validate;

use crate::shared::DatedRequest;

#[derive(Debug, Clone, Validate)]
pub struct ConfirmDonationDto {
    pub admin_id: i64,
    #[validate(range(min = 1, message = "Invalid units amount: Must be greater than 0"))]
    pub units: i32,
}

impl DatedRequest for ConfirmDonationDto {}
