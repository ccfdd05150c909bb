use crate::server::{
    config::Config, error::Error, mailer::Mailer, service::auth::google::GoogleAuth,
    storage::FileStore,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the SMTP mailer, or a disabled one when SMTP is not configured
pub fn build_mailer(config: &Config) -> Result<Mailer, Error> {
    match &config.smtp {
        Some(smtp) => Ok(Mailer::from_config(smtp)?),
        None => {
            tracing::warn!("SMTP not configured; outbound email disabled");
            Ok(Mailer::disabled())
        }
    }
}

/// Build the local file store rooted at the configured upload directory
pub fn build_storage(config: &Config) -> FileStore {
    FileStore::new(&config.upload_dir)
}

/// Build the Google OAuth client when credentials are configured
pub fn build_google_auth(config: &Config) -> Result<Option<GoogleAuth>, Error> {
    match &config.google {
        Some(google) => Ok(Some(GoogleAuth::from_config(google)?)),
        None => {
            tracing::warn!("Google OAuth not configured; OAuth login disabled");
            Ok(None)
        }
    }
}
