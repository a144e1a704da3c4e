//! Storage layer abstraction trait definition

mod task_store;

pub use task_store::{InMemoryTaskStore, TaskStore};
