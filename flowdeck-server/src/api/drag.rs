use axum::{extract::State, response::Json};
use flowdeck_core::DragItem;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct DragStartBody {
    active: DragItem,
}

/// `target` is null when the pointer is not over any droppable.
#[derive(Deserialize)]
pub struct DragTargetBody {
    target: Option<DragItem>,
}

pub async fn drag_start(
    State(state): State<AppState>,
    Json(body): Json<DragStartBody>,
) -> Json<serde_json::Value> {
    let mut session = state.session.lock().unwrap();
    session.drag.on_start(body.active);
    Json(serde_json::json!({ "board": session.store.view() }))
}

pub async fn drag_over(
    State(state): State<AppState>,
    Json(body): Json<DragTargetBody>,
) -> Json<serde_json::Value> {
    let mut session = state.session.lock().unwrap();
    let session = &mut *session;
    session.drag.on_over(&mut session.store, body.target);
    Json(serde_json::json!({ "board": session.store.view() }))
}

pub async fn drag_end(
    State(state): State<AppState>,
    Json(body): Json<DragTargetBody>,
) -> Json<serde_json::Value> {
    let mut session = state.session.lock().unwrap();
    let session = &mut *session;
    session.drag.on_end(&mut session.store, body.target);
    Json(serde_json::json!({ "board": session.store.view() }))
}
