use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Student {0} not found")]
    StudentNotFound(i32),
    #[error("Profile entry {0} not found")]
    EntryNotFound(i32),
    #[error("Profile entry {0} belongs to another student")]
    NotOwner(i32),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        match self {
            Self::StudentNotFound(_) | Self::EntryNotFound(_) => (
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
        }
    }
}
