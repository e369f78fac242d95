mod service;

pub use service::EventService;
