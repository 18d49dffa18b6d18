use crate::board::BoardStore;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// Payload attached to a draggable element, dispatched by exhaustive match.
///
/// Wire shape: `{ "type": "Column", "id": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum DragItem {
    Column(ItemId),
    Task(ItemId),
}

impl DragItem {
    pub fn id(&self) -> &ItemId {
        match self {
            DragItem::Column(id) | DragItem::Task(id) => id,
        }
    }
}

/// State machine over one drag gesture: idle until `on_start`, then hover
/// events reconcile task placement live, and `on_end` finalizes column
/// drops and returns to idle. Only one gesture is active at a time; a new
/// start replaces a stale one.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    active: Option<DragItem>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        DragCoordinator::default()
    }

    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn on_start(&mut self, item: DragItem) {
        if let Some(stale) = self.active.replace(item) {
            log::debug!(
                target: "flowdeck.drag",
                "New gesture started while {:?} was still active",
                stale
            );
        }
    }

    /// Hover reconciliation. A task hovered over another task moves to its
    /// position and adopts its column; hovered over a column's empty space
    /// it adopts the column without moving. Columns only reorder on drop.
    pub fn on_over(&mut self, store: &mut BoardStore, target: Option<DragItem>) {
        let Some(active) = self.active.clone() else {
            return;
        };
        let Some(target) = target else {
            return;
        };
        if active.id() == target.id() {
            return;
        }

        match (&active, &target) {
            (DragItem::Task(task_id), DragItem::Task(over_id)) => {
                let Some(over_column) = store.task(over_id).map(|t| t.column_id.clone()) else {
                    return;
                };
                store.move_task_to_column(task_id, &over_column);
                store.reorder_tasks(task_id, over_id);
            }
            (DragItem::Task(task_id), DragItem::Column(column_id)) => {
                store.move_task_to_column(task_id, column_id);
            }
            (DragItem::Column(_), _) => {}
        }
    }

    /// Drop. Ends the gesture unconditionally; a missing target is a cancel
    /// with no mutation. Task drops need no work here since hovering already
    /// applied their placement.
    pub fn on_end(&mut self, store: &mut BoardStore, target: Option<DragItem>) {
        let Some(active) = self.active.take() else {
            return;
        };
        let Some(target) = target else {
            return;
        };
        if active.id() == target.id() {
            return;
        }

        if let (DragItem::Column(active_id), DragItem::Column(over_id)) = (&active, &target) {
            store.reorder_columns(active_id, over_id);
        }
    }
}
