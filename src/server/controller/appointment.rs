use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::{AppointmentDto, ScheduleAppointmentDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::appointment::AppointmentService,
    },
};

pub static APPOINTMENT_TAG: &str = "appointment";

/// Schedule an interview for an approved application
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = ScheduleAppointmentDto,
    responses(
        (status = 201, description = "Appointment scheduled", body = MessageDto),
        (status = 403, description = "Application belongs to another student", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application is not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn schedule_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ScheduleAppointmentDto>,
) -> Result<impl IntoResponse, Error> {
    let appointment_service = AppointmentService::new(&state.db, &state.mailer);

    appointment_service
        .schedule(auth.id, body.application_id, body.date, body.time)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Cita agendada".to_string(),
        }),
    ))
}

/// List the calling student's appointments
#[utoipa::path(
    get,
    path = "/api/appointments/me",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "Appointments of the caller", body = Vec<AppointmentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_my_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let appointment_service = AppointmentService::new(&state.db, &state.mailer);

    let appointments = appointment_service.list_for_student(auth.id).await?;

    Ok(Json(appointments))
}
