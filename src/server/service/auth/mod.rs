pub mod credentials;
pub mod google;
pub mod token;
