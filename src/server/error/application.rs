use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Application ID {0} not found")]
    NotFound(i32),
    #[error("Opportunity ID {0} not found")]
    OpportunityNotFound(i32),
    #[error("Student {student_id} already applied to opportunity {opportunity_id}")]
    Duplicate { student_id: i32, opportunity_id: i32 },
    #[error("Opportunity ID {0} deadline has passed")]
    Expired(i32),
    #[error("Opportunity ID {0} has no vacancies left")]
    Full(i32),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        // Conflict bodies keep the Spanish labels the admin UI expects
        match self {
            Self::NotFound(_) | Self::OpportunityNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No encontrado".to_string(),
                }),
            )
                .into_response(),
            Self::Duplicate { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Ya postulado".to_string(),
                }),
            )
                .into_response(),
            Self::Expired(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Caducado".to_string(),
                }),
            )
                .into_response(),
            Self::Full(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Lleno".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
