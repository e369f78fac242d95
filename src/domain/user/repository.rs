use async_trait::async_trait;

use super::{NewUser, Role, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a taken email surfaces as `DomainError::Conflict`.
    async fn save(&self, user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;
    async fn exists_by_id(&self, id: i64) -> DomainResult<bool>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;

    /// Users holding `role`, ordered by id.
    async fn find_by_role(&self, role: Role) -> DomainResult<Vec<User>>;
}
