//! Donation event DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BloodDonationEvent, BloodType, ScheduleEventDto};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub blood_type: BloodType,
    pub units: i32,
    pub organizer_id: i64,
}

impl From<BloodDonationEvent> for EventResponse {
    fn from(e: BloodDonationEvent) -> Self {
        Self {
            id: e.id,
            event_name: e.event_name,
            event_date: e.event_date,
            blood_type: e.blood_type,
            units: e.units,
            organizer_id: e.organizer_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventRequest {
    #[schema(example = "Campus drive")]
    pub event_name: String,
    #[schema(value_type = String, example = "2026-06-01")]
    pub event_date: NaiveDate,
    #[schema(example = "ONeg")]
    pub blood_type: String,
    /// Target units, 1 to 5
    pub units: i32,
    pub organizer_id: i64,
}

impl From<ScheduleEventRequest> for ScheduleEventDto {
    fn from(r: ScheduleEventRequest) -> Self {
        Self {
            event_name: r.event_name,
            event_date: r.event_date,
            blood_type: r.blood_type,
            units: r.units,
            organizer_id: r.organizer_id,
        }
    }
}
