use sea_orm::DatabaseConnection;

use crate::server::{mailer::Mailer, service::auth::google::GoogleAuth, storage::FileStore};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: Mailer,
    pub storage: FileStore,
    pub jwt_secret: String,
    pub google: Option<GoogleAuth>,
}
