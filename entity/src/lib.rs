pub mod application;
pub mod appointment;
pub mod certification;
pub mod enums;
pub mod experience;
pub mod opportunity;
pub mod tutor_request;
pub mod user;

pub mod prelude {
    pub use super::application::Entity as Application;
    pub use super::appointment::Entity as Appointment;
    pub use super::certification::Entity as Certification;
    pub use super::enums::{ReviewStatus, UserRole};
    pub use super::experience::Entity as Experience;
    pub use super::opportunity::Entity as Opportunity;
    pub use super::tutor_request::Entity as TutorRequest;
    pub use super::user::Entity as User;
}
