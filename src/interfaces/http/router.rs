//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, patch, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{DonationService, EventService, UserService};
use crate::domain::{BloodType, BloodUnits, RepositoryProvider, Role};
use crate::shared::RequestValidator;

use super::common::ErrorResponse;
use super::modules::{donations, events, health, metrics, request_id, users};

/// State shared by every route. Handlers extract their own slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub user_service: Arc<UserService>,
    pub donation_service: Arc<DonationService>,
    pub event_service: Arc<EventService>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, validator: RequestValidator) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repos.clone(), validator.clone())),
            donation_service: Arc::new(DonationService::new(repos.clone(), validator.clone())),
            event_service: Arc::new(EventService::new(repos.clone(), validator)),
            repos,
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        users::UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for donations::DonationHandlerState {
    fn from_ref(s: &AppState) -> Self {
        donations::DonationHandlerState {
            donation_service: Arc::clone(&s.donation_service),
        }
    }
}

impl FromRef<AppState> for events::EventHandlerState {
    fn from_ref(s: &AppState) -> Self {
        events::EventHandlerState {
            event_service: Arc::clone(&s.event_service),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            repos: Arc::clone(&s.repos),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::register_user,
        users::list_admins,
        users::list_donors,
        users::find_user_by_email,
        // Donations
        donations::available_blood_units,
        donations::enter_donation,
        donations::confirm_blood_donation,
        donations::initiate_blood_donation,
        donations::my_blood_donations,
        // Events
        events::schedule_event,
    ),
    components(
        schemas(
            ErrorResponse,
            Role,
            BloodType,
            BloodUnits,
            health::HealthResponse,
            health::ComponentHealth,
            users::UserResponse,
            users::RegisterUserRequest,
            donations::DonationResponse,
            donations::EnterDonationRequest,
            donations::InitiateDonationRequest,
            donations::ConfirmDonationRequest,
            events::EventResponse,
            events::ScheduleEventRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service and storage health"),
        (name = "Users", description = "Donor and admin registration and lookup"),
        (name = "Donations", description = "Donation records, confirmation and blood unit totals"),
        (name = "Donation Events", description = "Scheduling of donation drives"),
    ),
    info(
        title = "Blood Donation Admin API",
        version = "1.0.0",
        description = "REST API for registering donors and admins, recording blood donations and scheduling donation drives",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus recorder handle is given.
pub fn create_api_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let admin_routes = Router::new()
        .route("/api/v1/admin", get(users::list_admins))
        .route("/api/v1/admin/donor", get(users::list_donors))
        .route("/api/v1/admin/user", get(users::find_user_by_email))
        .route("/api/v1/admin/register_user", post(users::register_user))
        .route(
            "/api/v1/admin/available_blood_units",
            get(donations::available_blood_units),
        )
        .route("/api/v1/admin/enter_donation", post(donations::enter_donation))
        .route(
            "/api/v1/admin/confirm_blood_donation/{donation_id}",
            patch(donations::confirm_blood_donation),
        )
        .route("/api/v1/admin/donation_event", post(events::schedule_event));

    let donor_routes = Router::new()
        .route(
            "/api/v1/donor/initiate_blood_donation",
            post(donations::initiate_blood_donation),
        )
        .route(
            "/api/v1/donor/my_blood_donations/{donor_id}",
            get(donations::my_blood_donations),
        );

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .merge(admin_routes)
        .merge(donor_routes)
        .with_state(state);

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .route_layer(middleware::from_fn(metrics::http_metrics_middleware))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
}
