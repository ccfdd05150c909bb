use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        application::{StudentApplicationDto, SubmitApplicationDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::application::ApplicationService,
    },
};

pub static APPLICATION_TAG: &str = "application";

/// Apply to an opportunity
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = SubmitApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = MessageDto),
        (status = 404, description = "Opportunity not found", body = ErrorDto),
        (status = 409, description = "Already applied, expired, or full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn submit_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SubmitApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let application_service = ApplicationService::new(&state.db);

    application_service.submit(auth.id, body.opportunity_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Postulación enviada".to_string(),
        }),
    ))
}

/// List the calling student's applications
#[utoipa::path(
    get,
    path = "/api/applications/me",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Applications of the caller", body = Vec<StudentApplicationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let application_service = ApplicationService::new(&state.db);

    let applications = application_service.list_for_student(auth.id).await?;

    Ok(Json(applications))
}
