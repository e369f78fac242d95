use chrono::NaiveDate;
use validator::Validate;

use crate::shared::DatedRequest;

/// Donation announced by the donor, pending admin confirmation.
#[derive(Debug, Clone, Validate)]
pub struct InitiateDonationDto {
    pub donor_id: i64,
    #[validate(range(min = 1, message = "Invalid units amount: Must be greater than 0"))]
    pub units: i32,
    pub donation_date: NaiveDate,
}

impl DatedRequest for InitiateDonationDto {
    fn scheduled_date(&self) -> Option<NaiveDate> {
        Some(self.donation_date)
    }
}
