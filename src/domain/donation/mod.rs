//! Blood donation aggregate

pub mod model;
pub mod repository;

mod dto_confirm;
mod dto_enter;
mod dto_initiate;

pub use model::{BloodDonation, BloodUnits, NewBloodDonation};

pub use dto_confirm::ConfirmDonationDto;
pub use dto_enter::EnterDonationDto;
pub use dto_initiate::InitiateDonationDto;

pub use repository::DonationRepository;
