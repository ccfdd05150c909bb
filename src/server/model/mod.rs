//! Server-side models: shared application state and the authenticated
//! caller extractor.

pub mod app;
pub mod auth;
