//! Donations module — admin entry/confirmation and donor self-service

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
