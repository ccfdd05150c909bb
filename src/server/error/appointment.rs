use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Application ID {0} not found")]
    ApplicationNotFound(i32),
    #[error("Application ID {0} does not belong to the caller")]
    NotOwner(i32),
    #[error("Application ID {0} is not approved; appointments require an approved application")]
    NotApproved(i32),
}

impl IntoResponse for AppointmentError {
    fn into_response(self) -> Response {
        match self {
            Self::ApplicationNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No encontrado".to_string(),
                }),
            )
                .into_response(),
            Self::NotOwner(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "No autorizado".to_string(),
                }),
            )
                .into_response(),
            Self::NotApproved(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "La postulación aún no está aprobada".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
