pub mod local;
pub mod memory;

use crate::types::BoardData;

/// Fixed key the whole board is stored under.
pub const BOARD_KEY: &str = "kanban-board-data";

/// Abstract key-value persistence surface for board state.
/// Implementations: LocalStore (filesystem), MemoryStore (tests, ephemeral).
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persistence adapter: loads and mirrors the full board record under
/// [`BOARD_KEY`]. Loads fall back to an empty board on absent or malformed
/// data; saves are best-effort and never fail the calling mutation.
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Persistence { store }
    }

    /// In-memory persistence, used by tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Persistence::new(Box::new(memory::MemoryStore::new()))
    }

    pub fn load(&self) -> BoardData {
        let Some(raw) = self.store.get(BOARD_KEY) else {
            return BoardData::default();
        };
        match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                log::warn!(
                    target: "flowdeck.storage",
                    "Discarding malformed board record ({} bytes): {}",
                    raw.len(),
                    e
                );
                BoardData::default()
            }
        }
    }

    pub fn save(&self, data: &BoardData) {
        let encoded = match serde_json::to_string(data) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::warn!(target: "flowdeck.storage", "Failed to encode board record: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(BOARD_KEY, &encoded) {
            log::warn!(target: "flowdeck.storage", "Failed to persist board record: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::memory::MemoryStore;
    use crate::types::{Column, ItemId};

    #[test]
    fn test_load_absent_key_is_empty_board() {
        let persistence = Persistence::in_memory();
        let data = persistence.load();
        assert!(data.saved_columns.is_empty());
        assert!(data.saved_tasks.is_empty());
    }

    #[test]
    fn test_load_malformed_record_falls_back_to_empty() {
        let store = MemoryStore::new();
        store.set(BOARD_KEY, "{not json").unwrap();

        let persistence = Persistence::new(Box::new(store));
        let data = persistence.load();
        assert!(data.saved_columns.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let persistence = Persistence::new(Box::new(store.clone()));

        let data = BoardData {
            saved_columns: vec![Column {
                id: ItemId::Num(1),
                title: "Column 1".to_string(),
            }],
            saved_tasks: Vec::new(),
        };
        persistence.save(&data);

        let reread = Persistence::new(Box::new(store)).load();
        assert_eq!(reread, data);
    }
}
