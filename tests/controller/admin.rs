use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::ReviewStatus;
use vinculo::{
    model::application::ApplicationStatusDto,
    server::controller::admin::{
        daily_report, dashboard_stats, set_application_status, ReportParams,
    },
};
use vinculo_test_utils::prelude::*;

use crate::util::{app_state, auth_for};

/// Expect a student caller to be refused on admin endpoints.
#[tokio::test]
async fn admin_endpoints_refuse_students() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "admin_forbidden");
    let student = fixtures::insert_student(&test.state.db, 1).await?;

    let result = dashboard_stats(State(state), auth_for(&student)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect an approval to answer 200 and the approved row to land in the
/// report.
#[tokio::test]
async fn approval_feeds_report() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "admin_report");
    let admin = fixtures::insert_admin(&test.state.db).await?;
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
    let application =
        fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;

    let updated = set_application_status(
        State(state.clone()),
        auth_for(&admin),
        Path(application.id),
        Json(ApplicationStatusDto {
            status: ReviewStatus::Aprobado,
        }),
    )
    .await;
    let report = daily_report(
        State(state),
        auth_for(&admin),
        Query(ReportParams { date: None }),
    )
    .await;

    assert!(updated.is_ok());
    let resp = updated.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(report.is_ok());
    let resp = report.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
