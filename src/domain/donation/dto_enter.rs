use chrono::NaiveDate;
use validator::Validate;

use crate::shared::DatedRequest;

/// Donation recorded directly by an admin.
#[derive(Debug, Clone, Validate)]
pub struct EnterDonationDto {
    #[validate(range(min = 1, message = "Invalid units amount: Must be greater than 0"))]
    pub units: i32,
    pub donation_date: NaiveDate,
    pub donor_id: i64,
    pub admin_id: i64,
}

impl DatedRequest for EnterDonationDto {
    fn scheduled_date(&self) -> Option<NaiveDate> {
        Some(self.donation_date)
    }
}
