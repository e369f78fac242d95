//! Donation drive scheduling

use std::sync::Arc;

use tracing::info;

use crate::domain::blood_type::INVALID_BLOOD_TYPE_MESSAGE;
use crate::domain::{
    BloodDonationEvent, BloodType, DomainError, DomainResult, NewBloodDonationEvent,
    RepositoryProvider, ScheduleEventDto,
};
use crate::shared::RequestValidator;

pub struct EventService {
    repos: Arc<dyn RepositoryProvider>,
    validator: RequestValidator,
}

impl EventService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, validator: RequestValidator) -> Self {
        Self { repos, validator }
    }

    /// Schedule a drive organized by an existing user.
    ///
    /// An unknown organizer is reported as a validation failure.
    pub async fn schedule_event(&self, dto: ScheduleEventDto) -> DomainResult<BloodDonationEvent> {
        self.validator.validate(&dto)?;

        let blood_type: BloodType = dto
            .blood_type
            .parse()
            .map_err(|_| DomainError::invalid(INVALID_BLOOD_TYPE_MESSAGE))?;

        let organizer = self
            .repos
            .users()
            .find_by_id(dto.organizer_id)
            .await?
            .ok_or_else(|| {
                DomainError::invalid(format!("user with {} does not exists", dto.organizer_id))
            })?;

        let event = self
            .repos
            .events()
            .save(NewBloodDonationEvent {
                event_name: dto.event_name,
                event_date: dto.event_date,
                blood_type,
                units: dto.units,
                organizer_id: dto.organizer_id,
            })
            .await?;

        metrics::counter!("donation_events_scheduled_total").increment(1);
        info!(
            event_id = event.id,
            organizer_id = event.organizer_id,
            organizer_role = %organizer.role,
            blood_type = %event.blood_type,
            date = %event.event_date,
            "Donation event scheduled"
        );
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{seed_user, store, today, validator};
    use crate::domain::Role;
    use crate::shared::DATE_IN_PAST_MESSAGE;

    fn dto(organizer_id: i64) -> ScheduleEventDto {
        ScheduleEventDto {
            event_name: "Spring drive".into(),
            event_date: today(),
            blood_type: "ONeg".into(),
            units: 5,
            organizer_id,
        }
    }

    #[tokio::test]
    async fn schedules_event_for_existing_organizer() {
        let repos = store();
        let admin = seed_user(repos.as_ref(), "a@example.com", Role::Admin, BloodType::APos).await;
        let svc = EventService::new(repos.clone(), validator());

        let event = svc.schedule_event(dto(admin.id)).await.unwrap();
        assert_eq!(event.blood_type, BloodType::ONeg);
        assert_eq!(event.units, 5);
        assert_eq!(repos.events().find_by_id(event.id).await.unwrap(), Some(event));
    }

    #[tokio::test]
    async fn unknown_organizer_is_a_validation_error() {
        let svc = EventService::new(store(), validator());
        let err = svc.schedule_event(dto(77)).await.unwrap_err();
        assert_eq!(err, DomainError::invalid("user with 77 does not exists"));
    }

    #[tokio::test]
    async fn rejects_out_of_range_units_bad_type_and_past_date() {
        let repos = store();
        let admin = seed_user(repos.as_ref(), "a@example.com", Role::Admin, BloodType::APos).await;
        let svc = EventService::new(repos, validator());

        let bad = ScheduleEventDto {
            event_name: "X".into(),
            event_date: today().pred_opt().unwrap(),
            blood_type: "O-".into(),
            units: 6,
            organizer_id: admin.id,
        };
        let DomainError::Validation(messages) = svc.schedule_event(bad).await.unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(messages.len(), 4);
        assert!(messages.contains("Invalid event name: Must be between 2 and 32 characters long"));
        assert!(messages.contains("Invalid units amount: Must be between 1 and 5"));
        assert!(messages.contains(INVALID_BLOOD_TYPE_MESSAGE));
        assert!(messages.contains(DATE_IN_PAST_MESSAGE));
    }

    #[tokio::test]
    async fn each_bad_field_is_rejected_on_its_own() {
        let repos = store();
        let admin = seed_user(repos.as_ref(), "a@example.com", Role::Admin, BloodType::APos).await;
        let svc = EventService::new(repos.clone(), validator());

        let cases: Vec<(ScheduleEventDto, &str)> = vec![
            (
                ScheduleEventDto {
                    event_name: "x".repeat(33),
                    ..dto(admin.id)
                },
                "Invalid event name: Must be between 2 and 32 characters long",
            ),
            (
                ScheduleEventDto {
                    units: 0,
                    ..dto(admin.id)
                },
                "Invalid units amount: Must be between 1 and 5",
            ),
            (
                ScheduleEventDto {
                    units: 6,
                    ..dto(admin.id)
                },
                "Invalid units amount: Must be between 1 and 5",
            ),
            (
                ScheduleEventDto {
                    event_date: today().pred_opt().unwrap(),
                    ..dto(admin.id)
                },
                DATE_IN_PAST_MESSAGE,
            ),
            (
                ScheduleEventDto {
                    blood_type: "Opos".into(),
                    ..dto(admin.id)
                },
                INVALID_BLOOD_TYPE_MESSAGE,
            ),
        ];

        for (request, expected) in cases {
            let err = svc.schedule_event(request).await.unwrap_err();
            assert_eq!(err, DomainError::invalid(expected));
        }

        let exactly_32 = ScheduleEventDto {
            event_name: "x".repeat(32),
            ..dto(admin.id)
        };
        let event = svc.schedule_event(exactly_32).await.unwrap();
        assert_eq!(repos.events().find_by_id(event.id).await.unwrap(), Some(event));
    }

    #[tokio::test]
    async fn duplicate_event_conflicts() {
        let repos = store();
        let admin = seed_user(repos.as_ref(), "a@example.com", Role::Admin, BloodType::APos).await;
        let svc = EventService::new(repos, validator());

        svc.schedule_event(dto(admin.id)).await.unwrap();
        let err = svc.schedule_event(dto(admin.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
