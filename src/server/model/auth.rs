use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use entity::enums::UserRole;

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
    service::auth::token,
};

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
///
/// Fails closed: requests without a valid token are rejected before the
/// handler runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i32,
    pub role: UserRole,
}

impl AuthUser {
    /// Rejects callers without the admin role.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        match self.role {
            UserRole::Admin => Ok(()),
            UserRole::Student => Err(AuthError::Forbidden),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let claims = token::verify_access_token(&state.jwt_secret, token)?;

        Ok(AuthUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}
