//! End-to-end tests through the real router, covering the bearer-token
//! extractor and multipart handling that direct handler calls bypass.

mod util;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use entity::enums::UserRole;
use tower::ServiceExt;
use vinculo::server::router;
use vinculo_test_utils::prelude::*;

use util::{app_state, bearer_for};

/// Expect protected routes to answer 401 without a bearer token.
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let app = router::routes().with_state(app_state(&test, "router_unauth"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/applications/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the opportunity listing to answer without any token.
#[tokio::test]
async fn serves_opportunities_unauthenticated() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    fixtures::insert_opportunity(&test.state.db, 3, None).await?;
    let app = router::routes().with_state(app_state(&test, "router_public"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/opportunities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect a valid bearer token to pass the extractor and reach the handler.
#[tokio::test]
async fn accepts_bearer_token() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let app = router::routes().with_state(app_state(&test, "router_auth"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/applications/me")
                .header(
                    header::AUTHORIZATION,
                    bearer_for(student.id, UserRole::Student),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect a student token to get 403 from admin routes through the router.
#[tokio::test]
async fn admin_routes_forbidden_for_students() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let app = router::routes().with_state(app_state(&test, "router_forbidden"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/stats")
                .header(
                    header::AUTHORIZATION,
                    bearer_for(student.id, UserRole::Student),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a multipart tutor request submission to answer 201.
#[tokio::test]
async fn submits_tutor_request_multipart() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let student = fixtures::insert_student(&test.state.db, 1).await?;
    let app = router::routes().with_state(app_state(&test, "router_multipart"));

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"title\"\r\n\r\n\
         Solicitud Pasantía\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"document\"; filename=\"carta.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         %PDF-1.4\r\n\
         --{boundary}--\r\n"
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tutor-requests")
                .header(
                    header::AUTHORIZATION,
                    bearer_for(student.id, UserRole::Student),
                )
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}
