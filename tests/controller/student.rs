use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use vinculo::{
    model::user::NewExperienceDto,
    server::controller::student::{add_experience, delete_experience, get_profile},
};
use vinculo_test_utils::prelude::*;

use crate::util::{app_state, auth_for};

/// Expect an added experience to appear on the profile and disappear after
/// deletion.
#[tokio::test]
async fn experience_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "student_experience");
    let student = fixtures::insert_student(&test.state.db, 1).await?;

    let added = add_experience(
        State(state.clone()),
        auth_for(&student),
        Json(NewExperienceDto {
            title: "Junior Developer".to_string(),
            company: "Acme".to_string(),
            start_date: "2024-01".to_string(),
            end_date: None,
            description: None,
        }),
    )
    .await;
    assert!(added.is_ok());
    let resp = added.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let inserted = fixtures::insert_experience(&test.state.db, student.id).await?;
    let deleted = delete_experience(
        State(state.clone()),
        auth_for(&student),
        Path(inserted.id),
    )
    .await;
    assert!(deleted.is_ok());

    let profile = get_profile(State(state), auth_for(&student)).await;
    assert!(profile.is_ok());

    Ok(())
}

/// Expect deleting another student's entry to answer 403.
#[tokio::test]
async fn delete_refuses_foreign_entry() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "student_foreign");
    let owner = fixtures::insert_student(&test.state.db, 1).await?;
    let intruder = fixtures::insert_student(&test.state.db, 2).await?;
    let experience = fixtures::insert_experience(&test.state.db, owner.id).await?;

    let result = delete_experience(State(state), auth_for(&intruder), Path(experience.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
