//! HTTP server: axum with an open CORS layer for the local browser UI.

use crate::api::api_router;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub async fn run(
    bind_address: &str,
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = api_router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_address, port)).await?;
    let actual_port = listener.local_addr()?.port();

    log::info!(
        "HTTP server listening on http://{}:{}",
        bind_address,
        actual_port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
