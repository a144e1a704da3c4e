//! 类型定义模块

mod task;

pub use task::{RowId, StoredRow, TaskChange, TaskEntry, TaskId, PLACEHOLDER_TEXT};
