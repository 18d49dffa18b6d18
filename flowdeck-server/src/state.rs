//! Shared application state passed to axum handlers.

use flowdeck_core::{BoardStore, DragCoordinator};
use std::sync::{Arc, Mutex};

/// The board store and the drag coordinator for the single active board.
/// Handlers lock the whole session, so there is exactly one writer at any
/// instant, matching the event-at-a-time mutation model.
pub struct BoardSession {
    pub store: BoardStore,
    pub drag: DragCoordinator,
}

impl BoardSession {
    pub fn new(store: BoardStore) -> Self {
        BoardSession {
            store,
            drag: DragCoordinator::new(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<BoardSession>>,
}

impl AppState {
    pub fn new(store: BoardStore) -> Self {
        AppState {
            session: Arc::new(Mutex::new(BoardSession::new(store))),
        }
    }
}
