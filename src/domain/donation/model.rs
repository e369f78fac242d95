//! Blood donation domain entity

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::BloodType;

/// A recorded donation.
///
/// Admin-entered records carry the admin at creation; donor-initiated ones
/// leave `admin_id` empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloodDonation {
    pub id: i64,
    pub units: i32,
    pub donation_date: NaiveDate,
    pub donor_id: i64,
    pub admin_id: Option<i64>,
}

impl BloodDonation {
    pub fn is_donor_initiated(&self) -> bool {
        self.admin_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBloodDonation {
    pub units: i32,
    pub donation_date: NaiveDate,
    pub donor_id: i64,
    pub admin_id: Option<i64>,
}

impl NewBloodDonation {
    pub fn admin_entered(units: i32, donation_date: NaiveDate, donor_id: i64, admin_id: i64) -> Self {
        Self {
            units,
            donation_date,
            donor_id,
            admin_id: Some(admin_id),
        }
    }

    pub fn donor_initiated(units: i32, donation_date: NaiveDate, donor_id: i64) -> Self {
        Self {
            units,
            donation_date,
            donor_id,
            admin_id: None,
        }
    }

    pub fn with_id(self, id: i64) -> BloodDonation {
        BloodDonation {
            id,
            units: self.units,
            donation_date: self.donation_date,
            donor_id: self.donor_id,
            admin_id: self.admin_id,
        }
    }
}

/// Total donated units for one blood type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodUnits {
    pub blood_type: BloodType,
    pub total_units: i64,
}
