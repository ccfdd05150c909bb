use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use entity::enums::ReviewStatus;
use vinculo::{
    model::{application::ApplicationStatusDto, appointment::ScheduleAppointmentDto},
    server::controller::{admin::set_application_status, appointment::schedule_appointment},
};
use vinculo_test_utils::prelude::*;

use crate::util::{app_state, auth_for};

/// Expect scheduling to answer 201 once the application has been approved.
#[tokio::test]
async fn schedules_after_approval() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "appt_approved");
    let admin = fixtures::insert_admin(&test.state.db).await?;
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
    let application =
        fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;
    set_application_status(
        State(state.clone()),
        auth_for(&admin),
        Path(application.id),
        Json(ApplicationStatusDto {
            status: ReviewStatus::Aprobado,
        }),
    )
    .await
    .expect("Failed to approve application");

    let result = schedule_appointment(
        State(state),
        auth_for(&student),
        Json(ScheduleAppointmentDto {
            application_id: application.id,
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: "10:30".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect scheduling against a still-pending application to answer 409.
#[tokio::test]
async fn rejects_pending_application() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "appt_pending");
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
    let application =
        fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;

    let result = schedule_appointment(
        State(state),
        auth_for(&student),
        Json(ScheduleAppointmentDto {
            application_id: application.id,
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: "10:30".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
