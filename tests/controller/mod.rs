//! Tests for HTTP controller endpoints, called directly with extractor
//! values so each one exercises the handler plus the service stack.

mod admin;
mod application;
mod appointment;
mod auth;
mod student;
