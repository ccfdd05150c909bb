use crate::server::error::config::ConfigError;

/// SMTP settings; absent when outbound email is disabled.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub email: String,
    pub password: String,
}

/// Google OAuth client settings; absent when OAuth login is disabled.
#[derive(Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

pub struct Config {
    pub bind_address: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub upload_dir: String,
    pub smtp: Option<SmtpConfig>,
    pub google: Option<GoogleConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let smtp = match std::env::var("SMTP_HOST") {
            Ok(host) => Some(SmtpConfig {
                host,
                email: require("SMTP_EMAIL")?,
                password: require("SMTP_PASSWORD")?,
            }),
            Err(_) => None,
        };

        let google = match std::env::var("GOOGLE_CLIENT_ID") {
            Ok(client_id) => Some(GoogleConfig {
                client_id,
                client_secret: require("GOOGLE_CLIENT_SECRET")?,
                callback_url: require("GOOGLE_CALLBACK_URL")?,
            }),
            Err(_) => None,
        };

        Ok(Self {
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            smtp,
            google,
        })
    }
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingVariable(key))
}
