//! Data access layer repositories.
//!
//! Repositories wrap database operations behind small structs taking any
//! [`sea_orm::ConnectionTrait`] so services and tests can run against either
//! the Postgres pool or the in-memory SQLite database.

pub mod application;
pub mod appointment;
pub mod certification;
pub mod experience;
pub mod opportunity;
pub mod tutor_request;
pub mod user;
