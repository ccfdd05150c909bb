use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        tutor::{MemoUploadedDto, TutorRequestDto, TutorStatusPatchDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::{status::StatusService, tutor::TutorService},
        util::multipart,
    },
};

pub static TUTOR_TAG: &str = "tutor";

/// Submit a tutor request with its signed document
#[utoipa::path(
    post,
    path = "/api/tutor-requests",
    tag = TUTOR_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Request filed", body = MessageDto),
        (status = 422, description = "Missing title or document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn submit_tutor_request(
    State(state): State<AppState>,
    auth: AuthUser,
    form: Multipart,
) -> Result<impl IntoResponse, Error> {
    let tutor_service = TutorService::new(&state.db, &state.storage);

    let mut form = multipart::collect(form).await?;
    let title = form.fields.remove("title").unwrap_or_default();
    let document = form.require_file("document")?;

    tutor_service.submit(auth.id, title, document).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Solicitud enviada".to_string(),
        }),
    ))
}

/// List the calling student's tutor requests
#[utoipa::path(
    get,
    path = "/api/tutor-requests/me",
    tag = TUTOR_TAG,
    responses(
        (status = 200, description = "Requests of the caller", body = Vec<TutorRequestDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_my_tutor_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let tutor_service = TutorService::new(&state.db, &state.storage);

    let requests = tutor_service.list_for_student(auth.id).await?;

    Ok(Json(requests))
}

/// List every tutor request in the queue
#[utoipa::path(
    get,
    path = "/api/admin/tutor-requests",
    tag = TUTOR_TAG,
    responses(
        (status = 200, description = "All requests with student info", body = Vec<TutorRequestDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_tutor_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let tutor_service = TutorService::new(&state.db, &state.storage);

    let requests = tutor_service.list_all().await?;

    Ok(Json(requests))
}

/// Update a tutor request's status or assigned tutor
#[utoipa::path(
    put,
    path = "/api/admin/tutor-requests/{id}",
    tag = TUTOR_TAG,
    params(("id" = i32, Path, description = "Tutor request ID")),
    request_body = TutorStatusPatchDto,
    responses(
        (status = 200, description = "Request updated", body = MessageDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_tutor_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<TutorStatusPatchDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let status_service = StatusService::new(&state.db);

    status_service.set_tutor_request_status(id, body).await?;

    Ok(Json(MessageDto {
        message: "Solicitud actualizada".to_string(),
    }))
}

/// Attach the acceptance memo to a tutor request
#[utoipa::path(
    post,
    path = "/api/admin/tutor-requests/{id}/memo",
    tag = TUTOR_TAG,
    params(("id" = i32, Path, description = "Tutor request ID")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Memo attached", body = MemoUploadedDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 422, description = "Missing memo file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn attach_memo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    form: Multipart,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let tutor_service = TutorService::new(&state.db, &state.storage);

    let form = multipart::collect(form).await?;
    let memo = form.require_file("memo")?;

    let updated = tutor_service.attach_memo(id, memo).await?;

    Ok(Json(MemoUploadedDto {
        message: "Memo adjuntado".to_string(),
        reference: updated.memo_reference.unwrap_or_default(),
    }))
}
