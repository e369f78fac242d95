//! In-memory storage implementation

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    BloodDonation, BloodDonationEvent, BloodType, BloodUnits, DomainError, DomainResult,
    DonationRepository, EventRepository, NewBloodDonation, NewBloodDonationEvent, NewUser,
    RepositoryProvider, Role, User, UserRepository,
};

const EMAIL_TAKEN: &str = "email already taken";
const DONATION_EXISTS: &str = "donor or donation date already exists";
const EVENT_EXISTS: &str = "donation event already exists";

/// In-memory storage for development and testing.
///
/// Mirrors the database constraints: unique email, one donation per donor
/// and day, unique (name, date, blood type) events, and user references
/// that must resolve.
pub struct InMemoryStorage {
    users: DashMap<i64, User>,
    emails: DashMap<String, i64>,
    donations: DashMap<i64, BloodDonation>,
    donation_keys: DashMap<(i64, NaiveDate), i64>,
    events: DashMap<i64, BloodDonationEvent>,
    event_keys: DashMap<(String, NaiveDate, BloodType), i64>,
    user_counter: AtomicI64,
    donation_counter: AtomicI64,
    event_counter: AtomicI64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
            donations: DashMap::new(),
            donation_keys: DashMap::new(),
            events: DashMap::new(),
            event_keys: DashMap::new(),
            user_counter: AtomicI64::new(1),
            donation_counter: AtomicI64::new(1),
            event_counter: AtomicI64::new(1),
        }
    }

    fn require_user(&self, id: i64) -> DomainResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::NotFound(
                "referenced user does not exist".to_string(),
            ))
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryStorage {
    async fn save(&self, user: NewUser) -> DomainResult<User> {
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict(EMAIL_TAKEN.to_string())),
            Entry::Vacant(slot) => {
                let id = self.user_counter.fetch_add(1, Ordering::SeqCst);
                let user = user.with_id(id);
                self.users.insert(id, user.clone());
                slot.insert(id);
                Ok(user)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        Ok(self.users.contains_key(&id))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let id = self.emails.get(email).map(|e| *e.value());
        Ok(id.and_then(|id| self.users.get(&id).map(|u| u.clone())))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        Ok(self.emails.contains_key(email))
    }

    async fn find_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|u| u.role == role)
            .map(|u| u.value().clone())
            .collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}

#[async_trait]
impl DonationRepository for InMemoryStorage {
    async fn save(&self, donation: NewBloodDonation) -> DomainResult<BloodDonation> {
        self.require_user(donation.donor_id)?;
        if let Some(admin_id) = donation.admin_id {
            self.require_user(admin_id)?;
        }

        match self
            .donation_keys
            .entry((donation.donor_id, donation.donation_date))
        {
            Entry::Occupied(_) => Err(DomainError::Conflict(DONATION_EXISTS.to_string())),
            Entry::Vacant(slot) => {
                let id = self.donation_counter.fetch_add(1, Ordering::SeqCst);
                let donation = donation.with_id(id);
                self.donations.insert(id, donation.clone());
                slot.insert(id);
                Ok(donation)
            }
        }
    }

    async fn update(&self, donation: BloodDonation) -> DomainResult<BloodDonation> {
        // Day index first, then records: the same order as `save`.
        let new_key = (donation.donor_id, donation.donation_date);
        let slot = match self.donation_keys.entry(new_key) {
            Entry::Occupied(owner) if *owner.get() != donation.id => {
                return Err(DomainError::Conflict(DONATION_EXISTS.to_string()))
            }
            slot => slot,
        };

        let old_key = {
            let mut stored = self.donations.get_mut(&donation.id).ok_or_else(|| {
                DomainError::NotFound(format!("donation {} does not exist", donation.id))
            })?;
            let old_key = (stored.donor_id, stored.donation_date);
            *stored = donation.clone();
            old_key
        };
        slot.or_insert(donation.id);

        if old_key != new_key {
            self.donation_keys.remove(&old_key);
        }
        Ok(donation)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<BloodDonation>> {
        Ok(self.donations.get(&id).map(|d| d.clone()))
    }

    async fn exists_by_donor_and_date(&self, donor_id: i64, date: NaiveDate) -> DomainResult<bool> {
        Ok(self.donation_keys.contains_key(&(donor_id, date)))
    }

    async fn find_by_donor(&self, donor_id: i64) -> DomainResult<Vec<BloodDonation>> {
        let mut donations: Vec<BloodDonation> = self
            .donations
            .iter()
            .filter(|d| d.donor_id == donor_id)
            .map(|d| d.value().clone())
            .collect();
        donations.sort_by_key(|d| d.id);
        Ok(donations)
    }

    async fn sum_units_by_blood_type(&self) -> DomainResult<Vec<BloodUnits>> {
        let mut totals: BTreeMap<BloodType, i64> = BTreeMap::new();
        for donation in self.donations.iter() {
            if let Some(donor) = self.users.get(&donation.donor_id) {
                *totals.entry(donor.blood_type).or_insert(0) += i64::from(donation.units);
            }
        }
        Ok(totals
            .into_iter()
            .map(|(blood_type, total_units)| BloodUnits {
                blood_type,
                total_units,
            })
            .collect())
    }
}

#[async_trait]
impl EventRepository for InMemoryStorage {
    async fn save(&self, event: NewBloodDonationEvent) -> DomainResult<BloodDonationEvent> {
        self.require_user(event.organizer_id)?;

        let key = (event.event_name.clone(), event.event_date, event.blood_type);
        match self.event_keys.entry(key) {
            Entry::Occupied(_) => Err(DomainError::Conflict(EVENT_EXISTS.to_string())),
            Entry::Vacant(slot) => {
                let id = self.event_counter.fetch_add(1, Ordering::SeqCst);
                let event = event.with_id(id);
                self.events.insert(id, event.clone());
                slot.insert(id);
                Ok(event)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<BloodDonationEvent>> {
        Ok(self.events.get(&id).map(|e| e.clone()))
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryStorage {
    fn users(&self) -> &dyn UserRepository {
        self
    }

    fn donations(&self) -> &dyn DonationRepository {
        self
    }

    fn events(&self) -> &dyn EventRepository {
        self
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}
