use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File reference {0:?} not found")]
    NotFound(String),
    #[error("File reference {0:?} is not a valid path")]
    InvalidReference(String),
    #[error("File storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No encontrado".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidReference(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Referencia de archivo inválida".to_string(),
                }),
            )
                .into_response(),
            Self::Unavailable(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Error al guardar el archivo".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
