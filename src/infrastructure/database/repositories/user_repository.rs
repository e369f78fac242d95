//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::{db_err, query_err};
use crate::domain::{DomainResult, NewUser, Role, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub const EMAIL_TAKEN: &str = "email already taken";

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        role: model.role.into(),
        blood_type: model.blood_type.into(),
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, new_user: NewUser) -> DomainResult<User> {
        let active = user::ActiveModel {
            id: NotSet,
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            email: Set(new_user.email),
            role: Set(new_user.role.into()),
            blood_type: Set(new_user.blood_type.into()),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| db_err(e, EMAIL_TAKEN))?;
        debug!("Inserted user {} ({})", model.id, model.email);
        Ok(user_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(model.map(user_model_to_domain))
    }

    async fn exists_by_id(&self, id: i64) -> DomainResult<bool> {
        let count = user::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count > 0)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(model.map(user_model_to_domain))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count > 0)
    }

    async fn find_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .filter(user::Column::Role.eq(user::UserRole::from(role)))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(models.into_iter().map(user_model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BloodType, DomainError};
    use crate::infrastructure::database::test_connection;

    fn new_user(email: &str, role: Role) -> NewUser {
        NewUser {
            first_name: "Ana".into(),
            last_name: "Kovac".into(),
            email: email.into(),
            role,
            blood_type: BloodType::ABNeg,
        }
    }

    #[tokio::test]
    async fn save_assigns_ids_and_round_trips() {
        let repo = SeaOrmUserRepository::new(test_connection().await);

        let saved = repo.save(new_user("ana@example.com", Role::Donor)).await.unwrap();
        assert!(saved.id > 0);

        let found = repo.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.blood_type, BloodType::ABNeg);
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved.clone()));
        assert_eq!(repo.find_by_id(saved.id + 100).await.unwrap(), None);
        assert!(repo.exists_by_id(saved.id).await.unwrap());
        assert!(!repo.exists_by_id(saved.id + 100).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let repo = SeaOrmUserRepository::new(test_connection().await);
        repo.save(new_user("dup@example.com", Role::Donor)).await.unwrap();

        let err = repo
            .save(new_user("dup@example.com", Role::Admin))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict(EMAIL_TAKEN.to_string()));
    }

    #[tokio::test]
    async fn find_by_role_filters_and_orders() {
        let repo = SeaOrmUserRepository::new(test_connection().await);
        let d1 = repo.save(new_user("d1@example.com", Role::Donor)).await.unwrap();
        repo.save(new_user("a1@example.com", Role::Admin)).await.unwrap();
        let d2 = repo.save(new_user("d2@example.com", Role::Donor)).await.unwrap();

        let donors = repo.find_by_role(Role::Donor).await.unwrap();
        assert_eq!(donors.iter().map(|u| u.id).collect::<Vec<_>>(), vec![d1.id, d2.id]);
        assert_eq!(repo.find_by_role(Role::Admin).await.unwrap().len(), 1);
        assert!(!repo.exists_by_email("nobody@example.com").await.unwrap());
    }
}
