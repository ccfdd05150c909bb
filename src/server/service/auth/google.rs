//! Google OAuth login flow.
//!
//! The redirect is stateless: the `state` parameter carries a short-lived
//! signed token instead of a server-side session, so the callback can land on
//! any instance.

use entity::enums::UserRole;
use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::user::TokenDto,
    server::{
        config::GoogleConfig,
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        mailer::Mailer,
        service::auth::token,
    },
};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

#[derive(Debug, Deserialize)]
struct GoogleUser {
    email: String,
    name: String,
}

#[derive(Clone)]
pub struct GoogleAuth {
    client: OAuthClient,
    http: reqwest::Client,
    userinfo_url: String,
}

impl GoogleAuth {
    pub fn from_config(config: &GoogleConfig) -> Result<Self, Error> {
        Self::with_endpoints(
            config,
            GOOGLE_AUTH_URL.to_string(),
            GOOGLE_TOKEN_URL.to_string(),
            GOOGLE_USERINFO_URL.to_string(),
        )
    }

    /// Builds a client against custom endpoints. Tests point this at a local
    /// mock server.
    pub fn with_endpoints(
        config: &GoogleConfig,
        auth_url: String,
        token_url: String,
        userinfo_url: String,
    ) -> Result<Self, Error> {
        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(auth_url)?)
            .set_token_uri(TokenUrl::new(token_url)?)
            .set_redirect_uri(RedirectUrl::new(config.callback_url.clone())?);

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|error| Error::InternalError(format!("HTTP client build failed: {error}")))?;

        Ok(Self {
            client,
            http,
            userinfo_url,
        })
    }

    /// Produces the Google consent URL the client should redirect to.
    pub fn login_url(&self, jwt_secret: &str) -> Result<String, Error> {
        let state = token::issue_state_token(jwt_secret)?;

        let (url, _) = self
            .client
            .authorize_url(|| CsrfToken::new(state))
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        Ok(url.to_string())
    }

    /// Handles the OAuth callback: validates state, exchanges the code,
    /// fetches the Google identity and logs the matching account in,
    /// creating it first if the email is unknown.
    pub async fn callback(
        &self,
        db: &DatabaseConnection,
        mailer: &Mailer,
        jwt_secret: &str,
        code: String,
        state: String,
    ) -> Result<TokenDto, Error> {
        token::verify_state_token(jwt_secret, &state)?;

        let exchanged = self
            .client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http)
            .await
            .map_err(|_| AuthError::OAuthStateMismatch)?;

        let identity: GoogleUser = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(exchanged.access_token().secret())
            .send()
            .await
            .map_err(|error| Error::InternalError(format!("Userinfo request failed: {error}")))?
            .json()
            .await
            .map_err(|error| Error::InternalError(format!("Userinfo body invalid: {error}")))?;

        let user_repository = UserRepository::new(db);
        let user = match user_repository.get_by_email(&identity.email).await? {
            Some(user) => user,
            None => {
                let role = if user_repository.count().await? == 0 {
                    UserRole::Admin
                } else {
                    UserRole::Student
                };

                let user = user_repository
                    .create(identity.name, identity.email, None, role)
                    .await?;

                mailer.send_welcome(&user.email, &user.name);

                user
            }
        };

        let token = token::issue_access_token(jwt_secret, user.id, user.role)?;

        Ok(TokenDto {
            token,
            user: user.into(),
        })
    }
}
