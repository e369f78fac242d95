//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod donation_repository;
pub mod event_repository;
pub mod repository_provider;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

/// Maps a driver error, reporting unique-key violations as `conflict`.
fn db_err(e: DbErr, conflict: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Conflict(conflict.to_string()),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            DomainError::NotFound("referenced user does not exist".to_string())
        }
        _ => DomainError::Database(e.to_string()),
    }
}

fn query_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}
