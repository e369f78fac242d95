//! Donation handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    ConfirmDonationRequest, DonationResponse, EnterDonationRequest, InitiateDonationRequest,
};
use crate::application::DonationService;
use crate::domain::BloodUnits;
use crate::interfaces::http::common::{ApiError, ApiJson, ApiPath, ErrorResponse};

#[derive(Clone)]
pub struct DonationHandlerState {
    pub donation_service: Arc<DonationService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/available_blood_units",
    tag = "Donations",
    responses(
        (status = 200, description = "Donated units per blood type", body = [BloodUnits])
    )
)]
pub async fn available_blood_units(
    State(state): State<DonationHandlerState>,
) -> Result<Json<Vec<BloodUnits>>, ApiError> {
    Ok(Json(
        state.donation_service.available_units_by_blood_type().await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/enter_donation",
    tag = "Donations",
    request_body = EnterDonationRequest,
    responses(
        (status = 201, description = "Donation recorded", body = DonationResponse),
        (status = 406, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Donor already has a donation on this date", body = ErrorResponse)
    )
)]
pub async fn enter_donation(
    State(state): State<DonationHandlerState>,
    ApiJson(request): ApiJson<EnterDonationRequest>,
) -> Result<(StatusCode, Json<DonationResponse>), ApiError> {
    let donation = state.donation_service.enter_donation(request.into()).await?;
    Ok((StatusCode::CREATED, Json(donation.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/confirm_blood_donation/{donation_id}",
    tag = "Donations",
    params(("donation_id" = i64, Path, description = "Donation ID")),
    request_body = ConfirmDonationRequest,
    responses(
        (status = 200, description = "Donation confirmed"),
        (status = 404, description = "Unknown donation", body = ErrorResponse),
        (status = 406, description = "Units do not match the record", body = ErrorResponse)
    )
)]
pub async fn confirm_blood_donation(
    State(state): State<DonationHandlerState>,
    ApiPath(donation_id): ApiPath<i64>,
    ApiJson(request): ApiJson<ConfirmDonationRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .donation_service
        .confirm_donation(donation_id, request.into())
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/v1/donor/initiate_blood_donation",
    tag = "Donations",
    request_body = InitiateDonationRequest,
    responses(
        (status = 200, description = "Donation announced"),
        (status = 406, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Donor already has a donation on this date", body = ErrorResponse)
    )
)]
pub async fn initiate_blood_donation(
    State(state): State<DonationHandlerState>,
    ApiJson(request): ApiJson<InitiateDonationRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .donation_service
        .initiate_donation(request.into())
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/v1/donor/my_blood_donations/{donor_id}",
    tag = "Donations",
    params(("donor_id" = i64, Path, description = "Donor ID")),
    responses(
        (status = 200, description = "Donations of the donor", body = [DonationResponse]),
        (status = 404, description = "Unknown donor or no donations", body = ErrorResponse)
    )
)]
pub async fn my_blood_donations(
    State(state): State<DonationHandlerState>,
    ApiPath(donor_id): ApiPath<i64>,
) -> Result<Json<Vec<DonationResponse>>, ApiError> {
    let donations = state.donation_service.list_donor_donations(donor_id).await?;
    Ok(Json(
        donations.into_iter().map(DonationResponse::from).collect(),
    ))
}
