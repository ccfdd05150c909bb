//! JWT issuing and verification.

use chrono::{Duration, Utc};
use entity::enums::UserRole;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

const ACCESS_TOKEN_HOURS: i64 = 24;
const STATE_TOKEN_MINUTES: i64 = 10;

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: i32,
    pub role: UserRole,
    pub exp: i64,
}

/// Claims for the short-lived token that rides through the OAuth redirect
/// as the `state` parameter.
#[derive(Debug, Serialize, Deserialize)]
struct StateClaims {
    purpose: String,
    exp: i64,
}

pub fn issue_access_token(
    secret: &str,
    user_id: i32,
    role: UserRole,
) -> Result<String, AuthError> {
    let claims = AccessClaims {
        sub: user_id,
        role,
        exp: (Utc::now() + Duration::hours(ACCESS_TOKEN_HOURS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

pub fn verify_access_token(secret: &str, token: &str) -> Result<AccessClaims, AuthError> {
    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

pub fn issue_state_token(secret: &str) -> Result<String, AuthError> {
    let claims = StateClaims {
        purpose: "oauth_state".to_string(),
        exp: (Utc::now() + Duration::minutes(STATE_TOKEN_MINUTES)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::OAuthStateMismatch)
}

pub fn verify_state_token(secret: &str, token: &str) -> Result<(), AuthError> {
    let data = decode::<StateClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::OAuthStateMismatch)?;

    if data.claims.purpose != "oauth_state" {
        return Err(AuthError::OAuthStateMismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod verify_access_token {
        use super::*;

        /// Expect a round-tripped token to carry the user id and role.
        #[test]
        fn accepts_own_token() {
            let token = issue_access_token("secret", 7, UserRole::Admin).unwrap();

            let claims = verify_access_token("secret", &token).unwrap();

            assert_eq!(claims.sub, 7);
            assert_eq!(claims.role, UserRole::Admin);
        }

        /// Expect a token signed with another secret to be rejected.
        #[test]
        fn rejects_wrong_secret() {
            let token = issue_access_token("secret", 7, UserRole::Student).unwrap();

            assert!(verify_access_token("other", &token).is_err());
        }
    }

    mod verify_state_token {
        use super::*;

        /// Expect an access token to be unusable as an OAuth state token.
        #[test]
        fn rejects_access_token() {
            let token = issue_access_token("secret", 7, UserRole::Student).unwrap();

            assert!(verify_state_token("secret", &token).is_err());
        }

        /// Expect a freshly issued state token to verify.
        #[test]
        fn accepts_state_token() {
            let token = issue_state_token("secret").unwrap();

            assert!(verify_state_token("secret", &token).is_ok());
        }
    }
}
