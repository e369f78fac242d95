//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use async_trait::async_trait;

use super::donation::DonationRepository;
use super::event::EventRepository;
use super::user::UserRepository;
use crate::shared::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     if repos.users().exists_by_id(7).await? {
///         let history = repos.donations().find_by_donor(7).await?;
///     }
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn donations(&self) -> &dyn DonationRepository;
    fn events(&self) -> &dyn EventRepository;

    /// Round-trip to the backing store, used by health checks.
    async fn ping(&self) -> DomainResult<()>;
}
