use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use vinculo::{
    model::application::SubmitApplicationDto,
    server::controller::application::{list_my_applications, submit_application},
};
use vinculo_test_utils::prelude::*;

use crate::util::{app_state, auth_for};

/// Expect a submission to answer 201 and show up in the student's listing.
#[tokio::test]
async fn submit_then_list() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "app_submit");
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;

    let submitted = submit_application(
        State(state.clone()),
        auth_for(&student),
        Json(SubmitApplicationDto {
            opportunity_id: opportunity.id,
        }),
    )
    .await;
    let listed = list_my_applications(State(state), auth_for(&student)).await;

    assert!(submitted.is_ok());
    let resp = submitted.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(listed.is_ok());

    Ok(())
}

/// Expect a submission to a single-vacancy opportunity that already has an
/// application to answer 409.
#[tokio::test]
async fn full_opportunity_conflicts() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "app_full");
    let first = fixtures::insert_student(&test.state.db, 1).await?;
    let second = fixtures::insert_student(&test.state.db, 2).await?;
    let opportunity = fixtures::insert_opportunity(&test.state.db, 1, None).await?;
    fixtures::insert_application(&test.state.db, first.id, opportunity.id).await?;

    let result = submit_application(
        State(state),
        auth_for(&second),
        Json(SubmitApplicationDto {
            opportunity_id: opportunity.id,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect a repeated submission to answer 409.
#[tokio::test]
async fn duplicate_submission_conflicts() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "app_duplicate");
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
    fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;

    let result = submit_application(
        State(state),
        auth_for(&student),
        Json(SubmitApplicationDto {
            opportunity_id: opportunity.id,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
