use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use vinculo::{
    model::user::{LoginDto, RegisterDto},
    server::controller::auth::{login, register},
};
use vinculo_test_utils::prelude::*;

use crate::util::app_state;

fn register_body(email: &str) -> RegisterDto {
    RegisterDto {
        name: "Ana".to_string(),
        email: email.to_string(),
        password: "secreto123".to_string(),
    }
}

/// Expect registration to answer 201.
#[tokio::test]
async fn register_returns_created() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "auth_register");

    let result = register(State(state), Json(register_body("ana@uni.edu"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect a duplicate email to answer 400.
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "auth_duplicate");

    register(State(state.clone()), Json(register_body("ana@uni.edu")))
        .await
        .unwrap();
    let result = register(State(state), Json(register_body("ana@uni.edu"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect login with the registered password to answer 200 and a wrong
/// password to answer 401.
#[tokio::test]
async fn login_checks_password() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let state = app_state(&test, "auth_login");
    register(State(state.clone()), Json(register_body("ana@uni.edu")))
        .await
        .unwrap();

    let ok = login(
        State(state.clone()),
        Json(LoginDto {
            email: "ana@uni.edu".to_string(),
            password: "secreto123".to_string(),
        }),
    )
    .await;
    let bad = login(
        State(state),
        Json(LoginDto {
            email: "ana@uni.edu".to_string(),
            password: "equivocada".to_string(),
        }),
    )
    .await;

    assert!(ok.is_ok());
    assert!(bad.is_err());
    let resp = bad.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
