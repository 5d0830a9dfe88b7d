//! # Server Setup
//!
//! Router construction, shared state, CORS, and HTTP server startup.

// region: --- Imports
use crate::handlers;
use crate::middleware::require_session;
use axum::{
    extract::FromRef,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use lib_core::{Config, UserStore};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<UserStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration.
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}
// endregion: --- Server Configuration

// region: --- Router
/// Build the application router.
///
/// Public routes take no session; `/api/auth/me` sits behind the bearer
/// token middleware. CORS mirrors the service's open-demo posture: any
/// origin, the three methods the endpoints use, and the two headers a
/// browser client sends.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let session_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/demo", post(handlers::auth::demo))
        .route("/api/auth/register", post(handlers::auth::register))
        .merge(session_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
// endregion: --- Router

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration loading or validation fails, or if
/// the bind address is unavailable.
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let store = Arc::new(UserStore::seeded().await);
    let app = router(AppState { store, config });

    let listener = tokio::net::TcpListener::bind(&server_config.bind_address).await?;
    info!("Auth service listening on http://{}", server_config.bind_address);
    info!("  POST /api/auth/login");
    info!("  POST /api/auth/demo");
    info!("  POST /api/auth/register");
    info!("  GET  /api/auth/me");

    axum::serve(listener, app).await?;

    Ok(())
}
// endregion: --- Server Setup
