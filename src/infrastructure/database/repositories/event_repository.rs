//! SeaORM implementation of EventRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use super::{db_err, query_err};
use crate::domain::{BloodDonationEvent, DomainResult, EventRepository, NewBloodDonationEvent};
use crate::infrastructure::database::entities::blood_donation_event;

pub const EVENT_EXISTS: &str = "donation event already exists";

pub struct SeaOrmEventRepository {
    db: DatabaseConnection,
}

impl SeaOrmEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn event_model_to_domain(model: blood_donation_event::Model) -> BloodDonationEvent {
    BloodDonationEvent {
        id: model.id,
        event_name: model.event_name,
        event_date: model.event_date,
        blood_type: model.blood_type.into(),
        units: model.units,
        organizer_id: model.organizer_id,
    }
}

#[async_trait]
impl EventRepository for SeaOrmEventRepository {
    async fn save(&self, event: NewBloodDonationEvent) -> DomainResult<BloodDonationEvent> {
        let active = blood_donation_event::ActiveModel {
            id: NotSet,
            event_name: Set(event.event_name),
            event_date: Set(event.event_date),
            blood_type: Set(event.blood_type.into()),
            units: Set(event.units),
            organizer_id: Set(event.organizer_id),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| db_err(e, EVENT_EXISTS))?;
        debug!("Inserted donation event {} '{}'", model.id, model.event_name);
        Ok(event_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<BloodDonationEvent>> {
        let model = blood_donation_event::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(model.map(event_model_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::{BloodType, DomainError, NewUser, Role, UserRepository};
    use crate::infrastructure::database::repositories::user_repository::SeaOrmUserRepository;
    use crate::infrastructure::database::test_connection;

    fn event(organizer_id: i64) -> NewBloodDonationEvent {
        NewBloodDonationEvent {
            event_name: "City drive".into(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            blood_type: BloodType::ONeg,
            units: 4,
            organizer_id,
        }
    }

    #[tokio::test]
    async fn saves_event_once_per_name_date_and_type() {
        let db = test_connection().await;
        let admin = SeaOrmUserRepository::new(db.clone())
            .save(NewUser {
                first_name: "Mia".into(),
                last_name: "Babic".into(),
                email: "mia@example.com".into(),
                role: Role::Admin,
                blood_type: BloodType::APos,
            })
            .await
            .unwrap();
        let repo = SeaOrmEventRepository::new(db);

        let saved = repo.save(event(admin.id)).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));

        let err = repo.save(event(admin.id)).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict(EVENT_EXISTS.to_string()));

        let mut other = event(admin.id);
        other.blood_type = BloodType::OPos;
        assert!(repo.save(other).await.is_ok());
    }
}
