mod service;

pub use service::DonationService;
