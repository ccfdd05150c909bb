//! Shared helpers for controller and router tests.

use entity::enums::UserRole;
use vinculo::server::{
    mailer::Mailer,
    model::{app::AppState, auth::AuthUser},
    service::auth::token,
    storage::FileStore,
};
use vinculo_test_utils::TestSetup;

pub static TEST_JWT_SECRET: &str = "test_jwt_secret";

/// Builds an [`AppState`] over the test database with email and OAuth
/// disabled and storage rooted in a per-test temp directory.
pub fn app_state(test: &TestSetup, name: &str) -> AppState {
    AppState {
        db: test.state.db.clone(),
        mailer: Mailer::disabled(),
        storage: FileStore::new(std::env::temp_dir().join(format!("vinculo_it_{name}"))),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        google: None,
    }
}

pub fn auth_for(user: &entity::user::Model) -> AuthUser {
    AuthUser {
        id: user.id,
        role: user.role,
    }
}

pub fn bearer_for(user_id: i32, role: UserRole) -> String {
    let token = token::issue_access_token(TEST_JWT_SECRET, user_id, role)
        .expect("Failed to issue test token");

    format!("Bearer {token}")
}
