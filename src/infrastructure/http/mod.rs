pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::controllers::{health, pages::PagesController, speech::SpeechController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn create_router(
    static_dir: &str,
    speech_controller: Arc<SpeechController>,
    pages_controller: Arc<PagesController>,
) -> Router {
    // Speech proxy routes
    let speech_routes = Router::new()
        .route("/api/get_token", get(SpeechController::get_token))
        .route(
            "/api/synthesize",
            post(SpeechController::synthesize).layer(DefaultBodyLimit::disable()),
        )
        .with_state(speech_controller);

    // Page and catalog routes
    let page_routes = Router::new()
        .route("/", get(PagesController::index))
        .route("/api/languages", get(PagesController::languages))
        .with_state(pages_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(speech_routes)
        .merge(page_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    speech_controller: Arc<SpeechController>,
    pages_controller: Arc<PagesController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(&config.static_dir, speech_controller, pages_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
