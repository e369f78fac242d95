use chrono::NaiveDate;
use validator::{Validate, ValidationError};

use crate::domain::blood_type::validate_blood_type_code;
use crate::shared::{require_non_empty, DatedRequest};

#[derive(Debug, Clone, Validate)]
pub struct ScheduleEventDto {
    #[validate(
        custom(function = "event_name_present"),
        length(
            min = 2,
            max = 32,
            message = "Invalid event name: Must be between 2 and 32 characters long"
        )
    )]
    pub event_name: String,
    pub event_date: NaiveDate,
    #[validate(custom(function = "validate_blood_type_code"))]
    pub blood_type: String,
    #[validate(range(min = 1, max = 5, message = "Invalid units amount: Must be between 1 and 5"))]
    pub units: i32,
    pub organizer_id: i64,
}

impl DatedRequest for ScheduleEventDto {
    fn scheduled_date(&self) -> Option<NaiveDate> {
        Some(self.event_date)
    }
}

fn event_name_present(value: &str) -> Result<(), ValidationError> {
    require_non_empty(value, "Invalid event name: Empty event name")
}
