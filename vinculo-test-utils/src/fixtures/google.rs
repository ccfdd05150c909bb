//! Mock Google OAuth endpoints for login callback tests.

use mockito::{Mock, ServerGuard};
use serde_json::json;

/// Mounts a token endpoint returning a bearer access token for any code.
pub async fn mock_token_endpoint(server: &mut ServerGuard, expected_requests: usize) -> Mock {
    server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": "mock_google_access_token",
                "token_type": "Bearer",
                "expires_in": 3600
            })
            .to_string(),
        )
        .expect(expected_requests)
        .create_async()
        .await
}

/// Mounts a userinfo endpoint returning the given identity.
pub async fn mock_userinfo_endpoint(
    server: &mut ServerGuard,
    email: &str,
    name: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/userinfo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "sub": "1234567890",
                "email": email,
                "name": name
            })
            .to_string(),
        )
        .expect(expected_requests)
        .create_async()
        .await
}
