use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use flowdeck_core::ItemId;
use serde::Deserialize;

use super::{log_api_issue, ErrorResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UpdateColumnBody {
    title: String,
}

#[derive(Deserialize)]
pub struct UpdateTaskBody {
    content: String,
}

pub async fn get_board(State(state): State<AppState>) -> Json<serde_json::Value> {
    let session = state.session.lock().unwrap();
    Json(serde_json::json!({
        "board": session.store.view(),
        "columns": session.store.columns(),
        "tasks": session.store.tasks(),
    }))
}

pub async fn create_column(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut session = state.session.lock().unwrap();
    let id = session.store.create_column();
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id, "board": session.store.view() })),
    )
}

pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateColumnBody>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    if body.title.trim().is_empty() {
        let status = StatusCode::BAD_REQUEST;
        let error = format!("Missing or empty title for column {}", id);
        log_api_issue(status, "flowdeck.api.update_column", &error);
        return Err((
            status,
            Json(ErrorResponse {
                error: "Missing or empty title".to_string(),
            }),
        ));
    }

    let id: ItemId = id.as_str().into();
    let mut session = state.session.lock().unwrap();
    session.store.update_column(&id, &body.title);
    Ok(Json(serde_json::json!({ "board": session.store.view() })))
}

pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let id: ItemId = id.as_str().into();
    let mut session = state.session.lock().unwrap();
    session.store.delete_column(&id);
    Json(serde_json::json!({ "success": true, "board": session.store.view() }))
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let column_id: ItemId = column_id.as_str().into();
    let mut session = state.session.lock().unwrap();
    let id = session.store.create_task(&column_id);
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id, "board": session.store.view() })),
    )
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    if body.content.trim().is_empty() {
        let status = StatusCode::BAD_REQUEST;
        let error = format!("Missing or empty content for task {}", id);
        log_api_issue(status, "flowdeck.api.update_task", &error);
        return Err((
            status,
            Json(ErrorResponse {
                error: "Missing or empty content".to_string(),
            }),
        ));
    }

    let id: ItemId = id.as_str().into();
    let mut session = state.session.lock().unwrap();
    session.store.update_task(&id, &body.content);
    Ok(Json(serde_json::json!({ "board": session.store.view() })))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let id: ItemId = id.as_str().into();
    let mut session = state.session.lock().unwrap();
    session.store.delete_task(&id);
    Json(serde_json::json!({ "success": true, "board": session.store.view() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::storage::Persistence;
    use flowdeck_core::BoardStore;

    /// State with one column and one task in it, plus their ids.
    fn seeded_state() -> (AppState, ItemId, ItemId) {
        let mut store = BoardStore::open(Persistence::in_memory());
        let column_id = store.create_column();
        let task_id = store.create_task(&column_id);
        (AppState::new(store), column_id, task_id)
    }

    #[tokio::test]
    async fn test_update_column_rejects_blank_title() {
        let (state, column_id, _) = seeded_state();

        let result = update_column(
            State(state.clone()),
            Path(column_id.to_string()),
            Json(UpdateColumnBody {
                title: "   ".to_string(),
            }),
        )
        .await;

        let Err((status, Json(body))) = result else {
            panic!("blank title should be rejected");
        };
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing or empty title");

        let session = state.session.lock().unwrap();
        assert_eq!(session.store.columns()[0].title, "Column 1");
    }

    #[tokio::test]
    async fn test_update_column_accepts_non_empty_title() {
        let (state, column_id, _) = seeded_state();

        let result = update_column(
            State(state.clone()),
            Path(column_id.to_string()),
            Json(UpdateColumnBody {
                title: "Backlog".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let session = state.session.lock().unwrap();
        assert_eq!(session.store.columns()[0].title, "Backlog");
    }

    #[tokio::test]
    async fn test_update_task_rejects_blank_content() {
        let (state, _, task_id) = seeded_state();

        let result = update_task(
            State(state.clone()),
            Path(task_id.to_string()),
            Json(UpdateTaskBody {
                content: "".to_string(),
            }),
        )
        .await;

        let Err((status, Json(body))) = result else {
            panic!("blank content should be rejected");
        };
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing or empty content");

        let session = state.session.lock().unwrap();
        assert_eq!(session.store.tasks()[0].content, "Task 1");
    }

    #[tokio::test]
    async fn test_update_task_accepts_non_empty_content() {
        let (state, _, task_id) = seeded_state();

        let result = update_task(
            State(state.clone()),
            Path(task_id.to_string()),
            Json(UpdateTaskBody {
                content: "Write release notes".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let session = state.session.lock().unwrap();
        assert_eq!(session.store.tasks()[0].content, "Write release notes");
    }
}
