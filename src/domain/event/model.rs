//! Blood donation drive

use chrono::NaiveDate;

use crate::domain::BloodType;

/// Scheduled donation drive; unique per (name, date, blood type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloodDonationEvent {
    pub id: i64,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub blood_type: BloodType,
    pub units: i32,
    pub organizer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBloodDonationEvent {
    pub event_name: String,
    pub event_date: NaiveDate,
    pub blood_type: BloodType,
    pub units: i32,
    pub organizer_id: i64,
}

impl NewBloodDonationEvent {
    pub fn with_id(self, id: i64) -> BloodDonationEvent {
        BloodDonationEvent {
            id,
            event_name: self.event_name,
            event_date: self.event_date,
            blood_type: self.blood_type,
            units: self.units,
            organizer_id: self.organizer_id,
        }
    }
}
