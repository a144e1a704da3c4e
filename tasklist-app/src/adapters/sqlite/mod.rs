//! SQLite-based row store using `SeaORM`.
//!
//! A single `tasks` table holds one row per task. The auto-increment `id`
//! column fixes insertion order and is handed out as the task's `RowId`,
//! so one of several rows with the same text can be deleted on its own.

pub(crate) mod entity;
mod migration;
mod task_store;

use std::path::Path;

use sea_orm::{Database, DatabaseConnection};
use tasklist_core::error::{CoreError, CoreResult};
use tasklist_core::traits::TaskStore;

/// SQLite-based row store for TUI/CLI frontends.
///
/// Implements `TaskStore` against a single `SQLite` database file.
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Open (or create) the database file without touching the schema.
    ///
    /// Call [`TaskStore::initialize`] before use.
    ///
    /// # Errors
    /// Returns `CoreError::StorageUnavailable` if directory creation or the
    /// database connection fails.
    pub async fn connect(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CoreError::StorageUnavailable(format!("Failed to create directory: {e}"))
                })?;
            }
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url).await.map_err(|e| {
            CoreError::StorageUnavailable(format!("Failed to connect to SQLite: {e}"))
        })?;

        log::debug!("Connected to task database at {}", db_path.display());
        Ok(Self { db })
    }

    /// Open the database file and bring its schema up to date.
    ///
    /// On a brand-new file this also seeds the placeholder task.
    ///
    /// # Errors
    /// Returns `CoreError::StorageUnavailable` if the connection or a schema
    /// migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        let store = Self::connect(db_path).await?;
        store.initialize().await?;
        Ok(store)
    }
}
