//! Donation event aggregate

pub mod model;
pub mod repository;

mod dto_schedule;

pub use model::{BloodDonationEvent, NewBloodDonationEvent};

pub use dto_schedule::ScheduleEventDto;

pub use repository::EventRepository;
