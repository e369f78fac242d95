//! User registration and lookup
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::blood_type::INVALID_BLOOD_TYPE_MESSAGE;
use crate::domain::{
    BloodType, DomainError, DomainResult, NewUser, RegisterUserDto, RepositoryProvider, Role,
    User,
};
use crate::shared::RequestValidator;

pub const EMAIL_TAKEN: &str = "email already taken";
pub const USER_NOT_FOUND: &str = "user does not exists";

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    validator: RequestValidator,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, validator: RequestValidator) -> Self {
        Self { repos, validator }
    }

    /// Register a donor or admin. The email must not be taken.
    pub async fn register_user(&self, dto: RegisterUserDto) -> DomainResult<User> {
        self.validator.validate(&dto)?;

        let role: Role = dto.role.parse().map_err(DomainError::invalid)?;
        let blood_type: BloodType = dto
            .blood_type
            .parse()
            .map_err(|_| DomainError::invalid(INVALID_BLOOD_TYPE_MESSAGE))?;

        if self.repos.users().exists_by_email(&dto.email).await? {
            return Err(DomainError::Conflict(EMAIL_TAKEN.into()));
        }

        let user = self
            .repos
            .users()
            .save(NewUser {
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                role,
                blood_type,
            })
            .await?;

        metrics::counter!("users_registered_total", "role" => role.as_str()).increment(1);
        info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    pub async fn list_users_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        self.repos.users().find_by_role(role).await
    }

    pub async fn find_user_by_email(&self, email: &str) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.into()))
    }
}
