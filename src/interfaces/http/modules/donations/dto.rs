//! Donation DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BloodDonation, ConfirmDonationDto, EnterDonationDto, InitiateDonationDto};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponse {
    pub id: i64,
    pub units: i32,
    pub donation_date: NaiveDate,
    pub donor_id: i64,
    /// Absent until an admin entered the donation
    pub admin_id: Option<i64>,
}

impl From<BloodDonation> for DonationResponse {
    fn from(d: BloodDonation) -> Self {
        Self {
            id: d.id,
            units: d.units,
            donation_date: d.donation_date,
            donor_id: d.donor_id,
            admin_id: d.admin_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnterDonationRequest {
    #[schema(example = 2)]
    pub units: i32,
    #[schema(value_type = String, example = "2026-05-04")]
    pub donation_date: NaiveDate,
    pub donor_id: i64,
    pub admin_id: i64,
}

impl From<EnterDonationRequest> for EnterDonationDto {
    fn from(r: EnterDonationRequest) -> Self {
        Self {
            units: r.units,
            donation_date: r.donation_date,
            donor_id: r.donor_id,
            admin_id: r.admin_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitiateDonationRequest {
    pub donor_id: i64,
    #[schema(example = 1)]
    pub units: i32,
    #[schema(value_type = String, example = "2026-05-04")]
    pub donation_date: NaiveDate,
}

impl From<InitiateDonationRequest> for InitiateDonationDto {
    fn from(r: InitiateDonationRequest) -> Self {
        Self {
            donor_id: r.donor_id,
            units: r.units,
            donation_date: r.donation_date,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDonationRequest {
    pub admin_id: i64,
    /// Units counted by the admin; must equal the recorded units
    pub units: i32,
}

impl From<ConfirmDonationRequest> for ConfirmDonationDto {
    fn from(r: ConfirmDonationRequest) -> Self {
        Self {
            admin_id: r.admin_id,
            units: r.units,
        }
    }
}
