//! Task List Core Library
//!
//! Provides the platform-independent parts of the task list application:
//! - Row store abstraction (`TaskStore`) with an in-memory implementation
//! - Task list model (`TaskListService`)
//! - Row styling and viewport geometry (`render`)
//!
//! Storage is abstracted through traits so that frontends can inject
//! an SQLite-backed store, or the in-memory one for tests.

pub mod error;
pub mod render;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::TaskListService;
pub use traits::{InMemoryTaskStore, TaskStore};
pub use types::{RowId, StoredRow, TaskChange, TaskEntry, TaskId, PLACEHOLDER_TEXT};
