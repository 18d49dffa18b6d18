pub mod board;
pub mod drag;
pub mod ids;
pub mod order;
pub mod storage;
pub mod types;
pub mod view;

pub use board::BoardStore;
pub use drag::{DragCoordinator, DragItem};
pub use types::{BoardData, Column, ItemId, Task};
