pub mod application;
pub mod appointment;
pub mod auth;
pub mod opportunity;
pub mod report;
pub mod stats;
pub mod status;
pub mod student;
pub mod tutor;
