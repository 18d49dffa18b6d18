use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;

mod board;
mod drag;

use crate::state::AppState;

/// Axum REST API routes.
///
///   GET    /board               -> full board view + raw sequences
///   POST   /columns             -> create column with a default title
///   PUT    /columns/:id         -> update column title
///   DELETE /columns/:id         -> delete column, cascading to its tasks
///   POST   /columns/:id/tasks   -> create task in column
///   PUT    /tasks/:id           -> update task content
///   DELETE /tasks/:id           -> delete task
///   POST   /drag/start          -> begin a drag gesture
///   POST   /drag/over           -> hover the active item over a target
///   POST   /drag/end            -> drop (or cancel) the active gesture
///   GET    /status              -> health check
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/board", get(board::get_board))
        .route("/columns", post(board::create_column))
        .route(
            "/columns/{id}",
            put(board::update_column).delete(board::delete_column),
        )
        .route("/columns/{id}/tasks", post(board::create_task))
        .route(
            "/tasks/{id}",
            put(board::update_task).delete(board::delete_task),
        )
        .route("/drag/start", post(drag::drag_start))
        .route("/drag/over", post(drag::drag_over))
        .route("/drag/end", post(drag::drag_end))
        .route("/status", get(status))
}

async fn status() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "ok": true }))
}

// ── Shared types and helpers used across sub-modules ────────────────────

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn log_api_issue(status: StatusCode, target: &'static str, message: impl AsRef<str>) {
    let message = message.as_ref();
    if status.is_server_error() {
        log::error!(target: target, "{}", message);
    } else {
        log::warn!(target: target, "{}", message);
    }
}
