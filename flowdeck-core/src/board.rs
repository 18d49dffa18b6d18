use crate::ids::IdGenerator;
use crate::order::move_item;
use crate::storage::Persistence;
use crate::types::{BoardData, Column, ItemId, Task};
use crate::view::{BoardView, ColumnView};

/// Owner of the two ordered sequences (columns, tasks) and of every
/// mutation on them. Collaborators read through the accessors and mutate
/// only through the operations below; each successful mutation ends with a
/// commit that mirrors the whole board to persistence.
///
/// Lookups on absent ids degrade to no-ops.
pub struct BoardStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    ids: IdGenerator,
    persistence: Persistence,
}

impl BoardStore {
    /// Open the board seeded from whatever the persistence surface holds.
    pub fn open(persistence: Persistence) -> Self {
        let BoardData {
            saved_columns,
            saved_tasks,
        } = persistence.load();
        BoardStore {
            columns: saved_columns,
            tasks: saved_tasks,
            ids: IdGenerator::new(),
            persistence,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &ItemId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Render shape for the presentation layer: each column paired with its
    /// tasks, both in sequence order.
    pub fn view(&self) -> BoardView {
        BoardView {
            columns: self
                .columns
                .iter()
                .map(|col| ColumnView {
                    id: col.id.clone(),
                    title: col.title.clone(),
                    tasks: self
                        .tasks
                        .iter()
                        .filter(|t| t.column_id == col.id)
                        .cloned()
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn create_column(&mut self) -> ItemId {
        let id = self.fresh_column_id();
        self.columns.push(Column {
            id: id.clone(),
            title: format!("Column {}", self.columns.len() + 1),
        });
        self.commit();
        id
    }

    /// Remove a column and cascade to every task it holds.
    pub fn delete_column(&mut self, id: &ItemId) {
        let before = self.columns.len();
        self.columns.retain(|col| col.id != *id);
        if self.columns.len() == before {
            return;
        }
        self.tasks.retain(|task| task.column_id != *id);
        self.commit();
    }

    pub fn update_column(&mut self, id: &ItemId, title: &str) {
        let Some(col) = self.columns.iter_mut().find(|col| col.id == *id) else {
            return;
        };
        col.title = title.to_string();
        self.commit();
    }

    pub fn create_task(&mut self, column_id: &ItemId) -> ItemId {
        let id = self.fresh_task_id();
        self.tasks.push(Task {
            id: id.clone(),
            column_id: column_id.clone(),
            content: format!("Task {}", self.tasks.len() + 1),
        });
        self.commit();
        id
    }

    pub fn delete_task(&mut self, id: &ItemId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != *id);
        if self.tasks.len() == before {
            return;
        }
        self.commit();
    }

    pub fn update_task(&mut self, id: &ItemId, content: &str) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == *id) else {
            return;
        };
        task.content = content.to_string();
        self.commit();
    }

    /// Move the active column to the over column's position. No-op when the
    /// ids are equal or either is absent.
    pub fn reorder_columns(&mut self, active: &ItemId, over: &ItemId) {
        if active == over {
            return;
        }
        let (Some(from), Some(to)) = (
            self.columns.iter().position(|col| col.id == *active),
            self.columns.iter().position(|col| col.id == *over),
        ) else {
            return;
        };
        move_item(&mut self.columns, from, to);
        self.commit();
    }

    /// Same positional move semantics as [`reorder_columns`], over the task
    /// sequence.
    ///
    /// [`reorder_columns`]: BoardStore::reorder_columns
    pub fn reorder_tasks(&mut self, active: &ItemId, over: &ItemId) {
        if active == over {
            return;
        }
        let (Some(from), Some(to)) = (
            self.tasks.iter().position(|task| task.id == *active),
            self.tasks.iter().position(|task| task.id == *over),
        ) else {
            return;
        };
        move_item(&mut self.tasks, from, to);
        self.commit();
    }

    /// Reassign a task to another column without touching its position in
    /// the task sequence.
    pub fn move_task_to_column(&mut self, task_id: &ItemId, target_column_id: &ItemId) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == *task_id) else {
            return;
        };
        if task.column_id == *target_column_id {
            return;
        }
        task.column_id = target_column_id.clone();
        self.commit();
    }

    fn fresh_column_id(&mut self) -> ItemId {
        let columns = &self.columns;
        self.ids.fresh(|id| columns.iter().any(|col| col.id == *id))
    }

    fn fresh_task_id(&mut self) -> ItemId {
        let tasks = &self.tasks;
        self.ids.fresh(|id| tasks.iter().any(|task| task.id == *id))
    }

    fn commit(&self) {
        self.persistence.save(&BoardData {
            saved_columns: self.columns.clone(),
            saved_tasks: self.tasks.clone(),
        });
    }
}
