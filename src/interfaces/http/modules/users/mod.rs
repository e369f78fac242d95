//! Users module — registration and lookups

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
