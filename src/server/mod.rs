//! Server application core modules.
//!
//! This module contains all server-side functionality for the Vinculo platform:
//! HTTP routing, registration and login (password and Google OAuth), opportunity
//! and application management, the tutor-request queue, interview scheduling,
//! file storage, outbound email, and the daily matching report used by the
//! liaison office.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mailer;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
