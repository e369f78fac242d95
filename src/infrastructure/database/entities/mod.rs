//! Database entities module

pub mod blood_donation;
pub mod blood_donation_event;
pub mod user;

pub use blood_donation::Entity as BloodDonation;
pub use blood_donation_event::Entity as BloodDonationEvent;
pub use user::Entity as User;
