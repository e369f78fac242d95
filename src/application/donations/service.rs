//! Donation records: entry, donor initiation, confirmation, and totals

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    BloodDonation, BloodUnits, ConfirmDonationDto, DomainError, DomainResult, EnterDonationDto,
    InitiateDonationDto, NewBloodDonation, RepositoryProvider,
};
use crate::shared::RequestValidator;

pub const DONATION_EXISTS: &str = "donor or donation date already exists";
pub const DONATION_NOT_FOUND: &str = "donation id does not exists";
pub const UNITS_MISMATCH: &str = "confirmed units does not match DONOR units";

pub struct DonationService {
    repos: Arc<dyn RepositoryProvider>,
    validator: RequestValidator,
}

impl DonationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, validator: RequestValidator) -> Self {
        Self { repos, validator }
    }

    /// Units donated so far, per donor blood type. Unconfirmed records count.
    pub async fn available_units_by_blood_type(&self) -> DomainResult<Vec<BloodUnits>> {
        self.repos.donations().sum_units_by_blood_type().await
    }

    /// Record a donation taken by an admin.
    pub async fn enter_donation(&self, dto: EnterDonationDto) -> DomainResult<BloodDonation> {
        self.validator.validate(&dto)?;

        let record =
            NewBloodDonation::admin_entered(dto.units, dto.donation_date, dto.donor_id, dto.admin_id);
        let donation = self.insert(record).await?;

        metrics::counter!("blood_donations_recorded_total", "source" => "admin").increment(1);
        info!(
            donation_id = donation.id,
            donor_id = donation.donor_id,
            admin_id = dto.admin_id,
            units = donation.units,
            "Donation entered"
        );
        Ok(donation)
    }

    /// Record a donation announced by the donor; it waits for confirmation.
    pub async fn initiate_donation(&self, dto: InitiateDonationDto) -> DomainResult<BloodDonation> {
        self.validator.validate(&dto)?;

        let record = NewBloodDonation::donor_initiated(dto.units, dto.donation_date, dto.donor_id);
        let donation = self.insert(record).await?;

        metrics::counter!("blood_donations_recorded_total", "source" => "donor").increment(1);
        info!(
            donation_id = donation.id,
            donor_id = donation.donor_id,
            date = %donation.donation_date,
            "Donation initiated"
        );
        Ok(donation)
    }

    /// Check the units an admin counted against the stored record and
    /// persist the record again. The admin id is only logged.
    pub async fn confirm_donation(
        &self,
        donation_id: i64,
        dto: ConfirmDonationDto,
    ) -> DomainResult<BloodDonation> {
        self.validator.validate(&dto)?;

        let stored = self
            .repos
            .donations()
            .find_by_id(donation_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(DONATION_NOT_FOUND.into()))?;

        if stored.units != dto.units {
            warn!(
                donation_id,
                stored_units = stored.units,
                confirmed_units = dto.units,
                "Confirmed units differ from donation record"
            );
            return Err(DomainError::invalid(UNITS_MISMATCH));
        }

        let donation = self.repos.donations().update(stored).await?;

        metrics::counter!("blood_donations_confirmed_total").increment(1);
        info!(donation_id, admin_id = dto.admin_id, "Donation confirmed");
        Ok(donation)
    }

    /// Donation history of one donor, oldest record first.
    pub async fn list_donor_donations(&self, donor_id: i64) -> DomainResult<Vec<BloodDonation>> {
        if !self.repos.users().exists_by_id(donor_id).await? {
            return Err(DomainError::NotFound(format!(
                "Donor with given id: {} does not exist",
                donor_id
            )));
        }

        let donations = self.repos.donations().find_by_donor(donor_id).await?;
        if donations.is_empty() {
            return Err(DomainError::NotFound(format!(
                "Donor with given id: {} does not have donations",
                donor_id
            )));
        }
        Ok(donations)
    }

    async fn insert(&self, record: NewBloodDonation) -> DomainResult<BloodDonation> {
        let taken = self
            .repos
            .donations()
            .exists_by_donor_and_date(record.donor_id, record.donation_date)
            .await?;
        if taken {
            return Err(DomainError::Conflict(DONATION_EXISTS.into()));
        }
        self.repos.donations().save(record).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{Days, NaiveDate};

    use super::*;
    use crate::application::testing::{seed_user, store, today, validator};
    use crate::domain::{BloodType, DonationRepository, EventRepository, Role, UserRepository};
    use crate::infrastructure::InMemoryStorage;
    use crate::shared::DATE_IN_PAST_MESSAGE;

    fn setup() -> (Arc<InMemoryStorage>, DonationService) {
        let repos = store();
        let svc = DonationService::new(repos.clone(), validator());
        (repos, svc)
    }

    /// In-memory store that counts donation updates.
    struct CountingStore {
        inner: Arc<InMemoryStorage>,
        updates: AtomicUsize,
    }

    impl CountingStore {
        fn updates(&self) -> usize {
            self.updates.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DonationRepository for CountingStore {
        async fn save(&self, donation: NewBloodDonation) -> DomainResult<BloodDonation> {
            self.inner.donations().save(donation).await
        }

        async fn update(&self, donation: BloodDonation) -> DomainResult<BloodDonation> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            self.inner.donations().update(donation).await
        }

        async fn find_by_id(&self, id: i64) -> DomainResult<Option<BloodDonation>> {
            self.inner.donations().find_by_id(id).await
        }

        async fn exists_by_donor_and_date(
            &self,
            donor_id: i64,
            date: NaiveDate,
        ) -> DomainResult<bool> {
            self.inner.donations().exists_by_donor_and_date(donor_id, date).await
        }

        async fn find_by_donor(&self, donor_id: i64) -> DomainResult<Vec<BloodDonation>> {
            self.inner.donations().find_by_donor(donor_id).await
        }

        async fn sum_units_by_blood_type(&self) -> DomainResult<Vec<BloodUnits>> {
            self.inner.donations().sum_units_by_blood_type().await
        }
    }

    #[async_trait]
    impl RepositoryProvider for CountingStore {
        fn users(&self) -> &dyn UserRepository {
            self.inner.users()
        }

        fn donations(&self) -> &dyn DonationRepository {
            self
        }

        fn events(&self) -> &dyn EventRepository {
            self.inner.events()
        }

        async fn ping(&self) -> DomainResult<()> {
            self.inner.ping().await
        }
    }

    fn in_days(n: u64) -> NaiveDate {
        today().checked_add_days(Days::new(n)).unwrap()
    }

    fn initiate(donor_id: i64, units: i32, date: NaiveDate) -> InitiateDonationDto {
        InitiateDonationDto {
            donor_id,
            units,
            donation_date: date,
        }
    }

    #[tokio::test]
    async fn enter_donation_stores_donor_and_admin() {
        let (repos, svc) = setup();
        let donor = seed_user(repos.as_ref(), "d@example.com", Role::Donor, BloodType::OPos).await;
        let admin = seed_user(repos.as_ref(), "a@example.com", Role::Admin, BloodType::APos).await;

        let donation = svc
            .enter_donation(EnterDonationDto {
                units: 2,
                donation_date: today(),
                donor_id: donor.id,
                admin_id: admin.id,
            })
            .await
            .unwrap();

        assert_eq!(donation.admin_id, Some(admin.id));
        assert_eq!(donation.donor_id, donor.id);
        assert_eq!(donation.donation_date, today());
    }

    #[tokio::test]
    async fn same_donor_same_day_conflicts() {
        let (repos, svc) = setup();
        let donor = seed_user(repos.as_ref(), "d@example.com", Role::Donor, BloodType::OPos).await;

        let first = svc.initiate_donation(initiate(donor.id, 1, in_days(3))).await.unwrap();
        assert!(first.is_donor_initiated());

        let err = svc
            .initiate_donation(initiate(donor.id, 2, in_days(3)))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict(DONATION_EXISTS.into()));

        assert!(svc.initiate_donation(initiate(donor.id, 2, in_days(4))).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_zero_units_and_past_dates() {
        let (repos, svc) = setup();
        let donor = seed_user(repos.as_ref(), "d@example.com", Role::Donor, BloodType::OPos).await;
        let yesterday = today().pred_opt().unwrap();

        let err = svc
            .initiate_donation(initiate(donor.id, 0, yesterday))
            .await
            .unwrap_err();
        let DomainError::Validation(messages) = err else {
            panic!("expected validation error");
        };
        assert!(messages.contains("Invalid units amount: Must be greater than 0"));
        assert!(messages.contains(DATE_IN_PAST_MESSAGE));
        assert!(repos.donations().find_by_donor(donor.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn confirm_requires_matching_units() {
        let (repos, svc) = setup();
        let donor = seed_user(repos.as_ref(), "d@example.com", Role::Donor, BloodType::ANeg).await;
        let admin = seed_user(repos.as_ref(), "a@example.com", Role::Admin, BloodType::APos).await;
        let donation = svc.initiate_donation(initiate(donor.id, 3, today())).await.unwrap();

        let err = svc
            .confirm_donation(
                donation.id,
                ConfirmDonationDto {
                    admin_id: admin.id,
                    units: 2,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::invalid(UNITS_MISMATCH));

        let confirmed = svc
            .confirm_donation(
                donation.id,
                ConfirmDonationDto {
                    admin_id: admin.id,
                    units: 3,
                },
            )
            .await
            .unwrap();
        assert_eq!(confirmed, donation);
        assert!(confirmed.is_donor_initiated());
    }

    #[tokio::test]
    async fn mismatched_confirmation_never_writes() {
        let inner = store();
        let donor = seed_user(inner.as_ref(), "d@example.com", Role::Donor, BloodType::ANeg).await;
        let admin = seed_user(inner.as_ref(), "a@example.com", Role::Admin, BloodType::APos).await;
        let counting = Arc::new(CountingStore {
            inner,
            updates: AtomicUsize::new(0),
        });
        let svc = DonationService::new(counting.clone(), validator());
        let donation = svc.initiate_donation(initiate(donor.id, 3, today())).await.unwrap();

        let confirm = |units| ConfirmDonationDto {
            admin_id: admin.id,
            units,
        };

        let err = svc.confirm_donation(donation.id, confirm(4)).await.unwrap_err();
        assert_eq!(err, DomainError::invalid(UNITS_MISMATCH));
        assert_eq!(counting.updates(), 0);

        let err = svc.confirm_donation(donation.id, confirm(0)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(counting.updates(), 0);

        svc.confirm_donation(donation.id, confirm(3)).await.unwrap();
        assert_eq!(counting.updates(), 1);
        assert_eq!(
            counting.donations().find_by_id(donation.id).await.unwrap(),
            Some(donation)
        );
    }

    #[tokio::test]
    async fn confirm_unknown_donation_is_not_found() {
        let (_, svc) = setup();
        let err = svc
            .confirm_donation(
                42,
                ConfirmDonationDto {
                    admin_id: 1,
                    units: 1,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound(DONATION_NOT_FOUND.into()));
    }

    #[tokio::test]
    async fn donor_history_distinguishes_unknown_and_empty() {
        let (repos, svc) = setup();
        let donor = seed_user(repos.as_ref(), "d@example.com", Role::Donor, BloodType::BPos).await;

        let err = svc.list_donor_donations(99).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound("Donor with given id: 99 does not exist".into())
        );

        let err = svc.list_donor_donations(donor.id).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound(format!(
                "Donor with given id: {} does not have donations",
                donor.id
            ))
        );

        let a = svc.initiate_donation(initiate(donor.id, 1, in_days(1))).await.unwrap();
        let b = svc.initiate_donation(initiate(donor.id, 2, in_days(2))).await.unwrap();
        assert_eq!(svc.list_donor_donations(donor.id).await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn totals_include_unconfirmed_and_zero_unit_records() {
        let (repos, svc) = setup();
        let b_neg = seed_user(repos.as_ref(), "b@example.com", Role::Donor, BloodType::BNeg).await;

        svc.initiate_donation(initiate(b_neg.id, 3, today())).await.unwrap();
        // Zero-unit records can only come from storage directly.
        repos
            .donations()
            .save(NewBloodDonation::donor_initiated(0, in_days(1), b_neg.id))
            .await
            .unwrap();

        let totals = svc.available_units_by_blood_type().await.unwrap();
        assert_eq!(
            totals,
            vec![BloodUnits {
                blood_type: BloodType::BNeg,
                total_units: 3
            }]
        );
    }
}
