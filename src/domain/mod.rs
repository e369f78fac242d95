pub mod blood_type;
pub mod donation;
pub mod event;
pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use blood_type::BloodType;
pub use donation::{
    BloodDonation, BloodUnits, ConfirmDonationDto, DonationRepository, EnterDonationDto,
    InitiateDonationDto, NewBloodDonation,
};
pub use event::{BloodDonationEvent, EventRepository, NewBloodDonationEvent, ScheduleEventDto};
pub use repositories::{DomainResult, RepositoryProvider};
pub use user::{NewUser, RegisterUserDto, Role, User, UserRepository};

pub use crate::shared::DomainError;
