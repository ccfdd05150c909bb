use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, RegisteredDto, TokenDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::auth::credentials::CredentialsService,
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct OAuthCallbackParams {
    code: String,
    state: String,
}

/// Register a new account with email and password
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisteredDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let credentials_service = CredentialsService::new(&state.db, &state.mailer);

    let registered = credentials_service.register(body).await?;

    Ok((StatusCode::CREATED, Json(registered)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let credentials_service = CredentialsService::new(&state.db, &state.mailer);

    let logged_in = credentials_service.login(&state.jwt_secret, body).await?;

    Ok(Json(logged_in))
}

/// Redirect to the Google consent screen
#[utoipa::path(
    get,
    path = "/api/auth/google/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google"),
        (status = 503, description = "OAuth login not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let google = state.google.as_ref().ok_or(AuthError::OAuthUnavailable)?;

    let url = google.login_url(&state.jwt_secret)?;

    Ok(Redirect::temporary(&url))
}

/// Complete the Google OAuth flow
#[utoipa::path(
    get,
    path = "/api/auth/google/callback",
    tag = AUTH_TAG,
    params(OAuthCallbackParams),
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "State validation failed", body = ErrorDto),
        (status = 503, description = "OAuth login not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let google = state.google.as_ref().ok_or(AuthError::OAuthUnavailable)?;

    let logged_in = google
        .callback(
            &state.db,
            &state.mailer,
            &state.jwt_secret,
            params.code,
            params.state,
        )
        .await?;

    Ok(Json(logged_in))
}
