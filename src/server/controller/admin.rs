use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        application::{AdminApplicationDto, ApplicationStatusDto},
        appointment::AppointmentDto,
        report::ReportRowDto,
        stats::StatsDto,
        user::ProfileDto,
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::{
            application::ApplicationService, appointment::AppointmentService,
            report::ReportService, stats::StatsService, status::StatusService,
            student::StudentService,
        },
    },
};

pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ReportParams {
    /// Restrict the report to approvals on this day, "YYYY-MM-DD".
    pub date: Option<NaiveDate>,
}

/// List every application on record
#[utoipa::path(
    get,
    path = "/api/admin/applications",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All applications with student info", body = Vec<AdminApplicationDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let application_service = ApplicationService::new(&state.db);

    let applications = application_service.list_all().await?;

    Ok(Json(applications))
}

/// Set an application's review status
#[utoipa::path(
    put,
    path = "/api/admin/applications/{id}/status",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    request_body = ApplicationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn set_application_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<ApplicationStatusDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let status_service = StatusService::new(&state.db);

    status_service.set_application_status(id, body.status).await?;

    Ok(Json(MessageDto {
        message: "Estado actualizado".to_string(),
    }))
}

/// Build the daily matching report
#[utoipa::path(
    get,
    path = "/api/admin/report",
    tag = ADMIN_TAG,
    params(ReportParams),
    responses(
        (status = 200, description = "Report rows, newest approval first", body = Vec<ReportRowDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn daily_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let report_service = ReportService::new(&state.db);

    let rows = report_service.daily_report(params.date).await?;

    Ok(Json(rows))
}

/// List every scheduled appointment
#[utoipa::path(
    get,
    path = "/api/admin/appointments",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All appointments with student info", body = Vec<AppointmentDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let appointment_service = AppointmentService::new(&state.db, &state.mailer);

    let appointments = appointment_service.list_all().await?;

    Ok(Json(appointments))
}

/// View any student's profile
#[utoipa::path(
    get,
    path = "/api/admin/students/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student profile", body = ProfileDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_student_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let student_service = StudentService::new(&state.db, &state.storage);

    let profile = student_service.profile(id).await?;

    Ok(Json(profile))
}

/// Aggregate numbers for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard aggregates", body = StatsDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let stats_service = StatsService::new(&state.db);

    let stats = stats_service.dashboard().await?;

    Ok(Json(stats))
}
