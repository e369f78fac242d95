mod service;

pub use service::UserService;
