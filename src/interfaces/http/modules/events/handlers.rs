use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{EventResponse, ScheduleEventRequest};
use crate::application::EventService;
use crate::interfaces::http::common::{ApiError, ApiJson, ErrorResponse};

#[derive(Clone)]
pub struct EventHandlerState {
    pub event_service: Arc<EventService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/donation_event",
    tag = "Donation Events",
    request_body = ScheduleEventRequest,
    responses(
        (status = 201, description = "Event scheduled", body = EventResponse),
        (status = 406, description = "Validation failed or unknown organizer", body = ErrorResponse),
        (status = 409, description = "Event already scheduled", body = ErrorResponse)
    )
)]
pub async fn schedule_event(
    State(state): State<EventHandlerState>,
    ApiJson(request): ApiJson<ScheduleEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let event = state.event_service.schedule_event(request.into()).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}
