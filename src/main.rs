mod config;
mod error;
mod handlers;
mod models;
mod session;

use axum::{
    routing::{get, post},
    Router,
};
use session::{SessionRegistry, SessionRegistryState, StaticCredentialVerifier};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_auth_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration, falling back to defaults when no file is found
    let config = match config::load_config_with_fallback() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}. Running with default configuration.", e);
            Arc::new(config::AppConfig::default())
        }
    };

    // Build the session registry; a credentials table in the config
    // installs the static verifier, otherwise any password is accepted
    let registry = match &config.credentials {
        Some(users) => {
            tracing::info!("Credential table loaded with {} user(s)", users.len());
            SessionRegistry::with_verifier(
                config.session.clone(),
                Arc::new(StaticCredentialVerifier::new(users.clone())),
            )
        }
        None => {
            tracing::info!("No credential table configured; accepting any password");
            SessionRegistry::new(config.session.clone())
        }
    };
    let state = SessionRegistryState::new(Arc::new(registry));

    // Build our application with routes
    let app = Router::new()
        // Health check routes
        .route("/", get(handlers::health::health_check))
        .route("/health", get(handlers::health::health_check))
        // Session routes
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route("/api/v1/auth/logout", post(handlers::auth::logout))
        .with_state(state)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Run the server
    let addr: SocketAddr = config.listen_addr.parse().unwrap();
    tracing::info!("Starting chat-auth-api server on {}", addr);
    tracing::info!("Session duration: {}s", config.session.duration_secs);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
