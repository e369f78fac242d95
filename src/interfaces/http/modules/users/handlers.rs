//! User handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{EmailQuery, RegisterUserRequest, UserResponse};
use crate::application::UserService;
use crate::domain::Role;
use crate::interfaces::http::common::{ApiError, ApiJson, ApiQuery, ErrorResponse};

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/register_user",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 406, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse)
    )
)]
pub async fn register_user(
    State(state): State<UserHandlerState>,
    ApiJson(request): ApiJson<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.user_service.register_user(request.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin",
    tag = "Users",
    responses(
        (status = 200, description = "All admins", body = [UserResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_admins(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    list_by_role(&state, Role::Admin).await
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/donor",
    tag = "Users",
    responses(
        (status = 200, description = "All donors", body = [UserResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_donors(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    list_by_role(&state, Role::Donor).await
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/user",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "User with this email", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    )
)]
pub async fn find_user_by_email(
    State(state): State<UserHandlerState>,
    ApiQuery(query): ApiQuery<EmailQuery>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.find_user_by_email(&query.email).await?;
    Ok(Json(user.into()))
}

async fn list_by_role(
    state: &UserHandlerState,
    role: Role,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list_users_by_role(role).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
