//! SeaORM implementation of RepositoryProvider

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{
    DomainError, DomainResult, DonationRepository, EventRepository, RepositoryProvider,
    UserRepository,
};

use super::donation_repository::SeaOrmDonationRepository;
use super::event_repository::SeaOrmEventRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let donor = repos.users().find_by_email("nina@example.com").await?;
/// let totals = repos.donations().sum_units_by_blood_type().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    users: SeaOrmUserRepository,
    donations: SeaOrmDonationRepository,
    events: SeaOrmEventRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            donations: SeaOrmDonationRepository::new(db.clone()),
            events: SeaOrmEventRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn donations(&self) -> &dyn DonationRepository {
        &self.donations
    }

    fn events(&self) -> &dyn EventRepository {
        &self.events
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db
            .ping()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}
