pub mod handlers;
pub mod types;

use crate::{config::Config, notes::NotesGateway, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use handlers::AppState;

/// Routes plus CORS open to any origin and request tracing.
pub fn router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/courses", get(handlers::get_courses))
        .route("/api/assignments", get(handlers::get_assignments))
        .route("/api/generate-notes", post(handlers::generate_notes))
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

pub async fn run(config: Config) -> Result<()> {
    let gateway = NotesGateway::from_config(&config.llm);

    let app_state = AppState {
        gateway: Arc::new(gateway),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
