pub mod config;
pub mod context;
pub mod error;
pub mod protocol;
pub mod session;

use std::sync::Arc;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use context::ServerContext;
pub use error::{ConfigError, ServerError};

/// Routes: `/ws` for the event channel, `/health` for liveness.
pub fn router(ctx: Arc<ServerContext>) -> Router {
    Router::new()
        .route("/ws", get(ws_upgrade))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn ws_upgrade(
    ws: WebSocketUpgrade,
    State(ctx): State<Arc<ServerContext>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| session::run_session(socket, ctx))
}

async fn health() -> &'static str {
    "ok"
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let addr = config.bind_address();
    let ctx = Arc::new(ServerContext::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr, "focus peaking server listening");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        // No signal handler: run until the process is killed.
        Err(_) => std::future::pending::<()>().await,
    }
}
