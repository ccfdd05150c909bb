use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CertificationDto, ExperienceDto, NewCertificationDto, NewExperienceDto, ProfileDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::student::StudentService,
        util::multipart,
    },
};

pub static STUDENT_TAG: &str = "student";

/// Get the calling student's profile
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Profile with experiences and certifications", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.storage);

    let profile = student_service.profile(auth.id).await?;

    Ok(Json(profile))
}

/// Upload or replace the calling student's CV
#[utoipa::path(
    post,
    path = "/api/profile/cv",
    tag = STUDENT_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "CV stored", body = MessageDto),
        (status = 422, description = "Missing file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn upload_cv(
    State(state): State<AppState>,
    auth: AuthUser,
    form: Multipart,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.storage);

    let form = multipart::collect(form).await?;
    let file = form.require_file("cv")?;

    student_service.upload_cv(auth.id, file).await?;

    Ok(Json(MessageDto {
        message: "CV subido exitosamente".to_string(),
    }))
}

/// Add a work experience entry
#[utoipa::path(
    post,
    path = "/api/profile/experiences",
    tag = STUDENT_TAG,
    request_body = NewExperienceDto,
    responses(
        (status = 201, description = "Experience added", body = ExperienceDto),
        (status = 422, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewExperienceDto>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.storage);

    let experience = student_service.add_experience(auth.id, body).await?;

    Ok((StatusCode::CREATED, Json(experience)))
}

/// Delete one of the calling student's experience entries
#[utoipa::path(
    delete,
    path = "/api/profile/experiences/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Experience ID")),
    responses(
        (status = 200, description = "Experience deleted", body = MessageDto),
        (status = 403, description = "Entry belongs to another student", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.storage);

    student_service.delete_experience(auth.id, id).await?;

    Ok(Json(MessageDto {
        message: "Experiencia eliminada".to_string(),
    }))
}

/// Add a certification entry
#[utoipa::path(
    post,
    path = "/api/profile/certifications",
    tag = STUDENT_TAG,
    request_body = NewCertificationDto,
    responses(
        (status = 201, description = "Certification added", body = CertificationDto),
        (status = 422, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_certification(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewCertificationDto>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.storage);

    let certification = student_service.add_certification(auth.id, body).await?;

    Ok((StatusCode::CREATED, Json(certification)))
}

/// Delete one of the calling student's certification entries
#[utoipa::path(
    delete,
    path = "/api/profile/certifications/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Certification ID")),
    responses(
        (status = 200, description = "Certification deleted", body = MessageDto),
        (status = 403, description = "Entry belongs to another student", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_certification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db, &state.storage);

    student_service.delete_certification(auth.id, id).await?;

    Ok(Json(MessageDto {
        message: "Certificación eliminada".to_string(),
    }))
}
