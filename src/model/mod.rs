//! API data transfer objects.
//!
//! These models define the JSON surface of the platform: request payloads,
//! responses, and the flat report rows consumed by the admin UI.

pub mod api;
pub mod application;
pub mod appointment;
pub mod opportunity;
pub mod report;
pub mod stats;
pub mod tutor;
pub mod user;
