//! Email/password registration and login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, RegisteredDto, TokenDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        mailer::Mailer,
        service::auth::token,
    },
};

pub struct CredentialsService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
}

impl<'a> CredentialsService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer) -> Self {
        Self { db, mailer }
    }

    /// Registers a new account. The very first account on a fresh deployment
    /// becomes the admin; everyone after that is a student.
    pub async fn register(&self, body: RegisterDto) -> Result<RegisteredDto, Error> {
        let user_repository = UserRepository::new(self.db);

        if body.name.trim().is_empty() || body.password.is_empty() {
            return Err(Error::ValidationError(
                "Nombre y contraseña son obligatorios".to_string(),
            ));
        }

        if user_repository.get_by_email(&body.email).await?.is_some() {
            return Err(AuthError::EmailTaken(body.email).into());
        }

        let role = if user_repository.count().await? == 0 {
            UserRole::Admin
        } else {
            UserRole::Student
        };

        let password_hash = hash_password(&body.password)?;
        let user = user_repository
            .create(body.name, body.email, Some(password_hash), role)
            .await?;

        self.mailer.send_welcome(&user.email, &user.name);

        Ok(RegisteredDto {
            message: "Usuario registrado exitosamente".to_string(),
            role: user.role,
        })
    }

    pub async fn login(&self, jwt_secret: &str, body: LoginDto) -> Result<TokenDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_email(&body.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // OAuth-only accounts have no local password.
        let stored_hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(stored_hash, &body.password)?;

        let token = token::issue_access_token(jwt_secret, user.id, user.role)?;

        Ok(TokenDto {
            token,
            user: user.into(),
        })
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|error| Error::InternalError(format!("Password hashing failed: {error}")))
}

fn verify_password(stored_hash: &str, password: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
