use async_trait::async_trait;

use super::model::{BloodDonationEvent, NewBloodDonationEvent};
use crate::domain::DomainResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert an event; an existing (name, date, blood type) triple
    /// surfaces as `DomainError::Conflict`.
    async fn save(&self, event: NewBloodDonationEvent) -> DomainResult<BloodDonationEvent>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<BloodDonationEvent>>;
}
