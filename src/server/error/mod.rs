//! Error types for the Vinculo server.
//!
//! Each domain defines its own `thiserror` enum with an `IntoResponse`
//! mapping; this module aggregates them into a single [`Error`] so handlers
//! can use `?` throughout. Client-facing failures (not found, conflicts,
//! authorization) keep their specific status codes, everything else is logged
//! and returned as a generic 500 without leaking internals.

pub mod application;
pub mod appointment;
pub mod auth;
pub mod config;
pub mod profile;
pub mod storage;
pub mod tutor;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        application::ApplicationError, appointment::AppointmentError, auth::AuthError,
        config::ConfigError, profile::ProfileError, storage::StorageError, tutor::TutorError,
    },
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    ApplicationError(#[from] ApplicationError),
    #[error(transparent)]
    AppointmentError(#[from] AppointmentError),
    #[error(transparent)]
    TutorError(#[from] TutorError),
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Request payload failed validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),
    /// Failed to parse a value from string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Vinculo's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    OAuthUrlError(#[from] oauth2::url::ParseError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ApplicationError(err) => err.into_response(),
            Self::AppointmentError(err) => err.into_response(),
            Self::TutorError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            Self::ValidationError(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
impl From<Error> for vinculo_test_utils::TestError {
    fn from(err: Error) -> Self {
        Self::Server(err.to_string())
    }
}

/// Wrapper type converting any displayable error into a 500 response.
///
/// The full error is logged for debugging; the client receives a generic
/// message so internals are not exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Error interno".to_string(),
            }),
        )
            .into_response()
    }
}
