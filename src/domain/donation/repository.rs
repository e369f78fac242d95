//! Blood donation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{BloodDonation, BloodUnits, NewBloodDonation};
use crate::domain::DomainResult;

#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Insert a donation; a second record for the same donor and date
    /// surfaces as `DomainError::Conflict`.
    async fn save(&self, donation: NewBloodDonation) -> DomainResult<BloodDonation>;

    /// Persist an existing record as-is.
    async fn update(&self, donation: BloodDonation) -> DomainResult<BloodDonation>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<BloodDonation>>;

    async fn exists_by_donor_and_date(&self, donor_id: i64, date: NaiveDate) -> DomainResult<bool>;

    /// Donations of one donor, ordered by id.
    async fn find_by_donor(&self, donor_id: i64) -> DomainResult<Vec<BloodDonation>>;

    /// Sum of units over all donations, grouped by the donor's blood type.
    async fn sum_units_by_blood_type(&self) -> DomainResult<Vec<BloodUnits>>;
}
