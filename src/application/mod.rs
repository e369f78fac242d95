//! Application layer: use-case orchestration over the repository provider.

pub mod donations;
pub mod events;
pub mod users;

pub use donations::DonationService;
pub use events::EventService;
pub use users::UserService;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::{BloodType, NewUser, RepositoryProvider, Role, User};
    use crate::infrastructure::InMemoryStorage;
    use crate::shared::{FixedClock, RequestValidator};

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 20).unwrap()
    }

    pub fn validator() -> RequestValidator {
        RequestValidator::new(Arc::new(FixedClock(today())))
    }

    pub fn store() -> Arc<InMemoryStorage> {
        Arc::new(InMemoryStorage::new())
    }

    pub async fn seed_user(
        repos: &dyn RepositoryProvider,
        email: &str,
        role: Role,
        blood_type: BloodType,
    ) -> User {
        repos
            .users()
            .save(NewUser {
                first_name: "Nina".into(),
                last_name: "Peric".into(),
                email: email.into(),
                role,
                blood_type,
            })
            .await
            .unwrap()
    }
}
