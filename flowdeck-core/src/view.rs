use crate::types::{ItemId, Task};
use serde::Serialize;

/// Render shape consumed by the board UI: the column sequence with each
/// column's tasks already grouped, so the client renders without joining
/// the two sequences itself.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub id: ItemId,
    pub title: String,
    pub tasks: Vec<Task>,
}
