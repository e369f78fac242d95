//! # Blood donation admin service
//!
//! Registers donors and admins, records blood donations, confirms
//! donor-initiated donations, reports donated units per blood type and
//! schedules donation drives.
//!
//! ## Architecture
//!
//! - **domain**: entities, request types, repository traits
//! - **application**: use-case services
//! - **infrastructure**: SeaORM persistence and the in-memory store
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: errors, clock, request validation, shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryStorage, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiDoc, AppState};
