use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Tutor request ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for TutorError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Solicitud no encontrada".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
