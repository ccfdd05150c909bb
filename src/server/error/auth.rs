use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Authorization header missing or malformed")]
    MissingToken,
    #[error("Bearer token failed validation")]
    InvalidToken,
    #[error("OAuth state failed validation")]
    OAuthStateMismatch,
    #[error("OAuth login is not configured on this deployment")]
    OAuthUnavailable,
    #[error("Caller lacks the required role")]
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::EmailTaken(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Email ya registrado".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Credenciales incorrectas".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "No autenticado".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::OAuthStateMismatch => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::OAuthUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "OAuth login no disponible".to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "No autorizado".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
