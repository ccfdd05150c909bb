use vinculo::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");
    let mailer = startup::build_mailer(&config).expect("Failed to build mailer");
    let storage = startup::build_storage(&config);
    let google = startup::build_google_auth(&config).expect("Failed to build Google OAuth client");

    let state = AppState {
        db,
        mailer,
        storage,
        jwt_secret: config.jwt_secret.clone(),
        google,
    };

    let app = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind listener");

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
