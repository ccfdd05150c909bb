pub mod admin;
pub mod application;
pub mod appointment;
pub mod auth;
pub mod files;
pub mod opportunity;
pub mod student;
pub mod tutor;
