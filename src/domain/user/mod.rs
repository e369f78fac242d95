//! User aggregate
//!
//! Contains the User entity, registration DTO, and repository interface.

pub mod model;
pub mod repository;

mod dto_register;

pub use model::{validate_role_code, NewUser, Role, User};

pub use dto_register::RegisterUserDto;

pub use repository::UserRepository;
