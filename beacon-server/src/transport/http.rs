use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::relay::RelayHandle;
use crate::transport::ws::ws_handler;

/// Assemble the HTTP front door: the WebSocket upgrade route and a
/// liveness probe.
pub fn app(relay: RelayHandle) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(cors)
        .with_state(relay)
}

async fn health() -> &'static str {
    "alive"
}
