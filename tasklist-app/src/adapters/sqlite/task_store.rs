//! `TaskStore` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use sea_orm_migration::MigratorTrait;

use tasklist_core::error::{CoreError, CoreResult};
use tasklist_core::traits::TaskStore;
use tasklist_core::types::{RowId, StoredRow};

use super::entity::task;
use super::migration::Migrator;
use super::SqliteStore;

#[async_trait]
impl TaskStore for SqliteStore {
    async fn initialize(&self) -> CoreResult<()> {
        // Ensure schema is up to date before the store is used.
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| CoreError::StorageUnavailable(format!("Failed to run migrations: {e}")))
    }

    async fn append_row(&self, text: &str) -> CoreResult<RowId> {
        let active_model = task::ActiveModel {
            task: Set(text.to_string()),
            ..Default::default()
        };

        let result = task::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to insert task: {e}")))?;

        Ok(RowId::new(i64::from(result.last_insert_id)))
    }

    async fn delete_row(&self, id: RowId) -> CoreResult<()> {
        let key = i32::try_from(id.value())
            .map_err(|_| CoreError::StorageError(format!("Row id {} out of range", id.value())))?;

        let result = task::Entity::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete task: {e}")))?;

        if result.rows_affected == 0 {
            log::debug!("Task row {key} already gone, nothing to delete");
        }
        Ok(())
    }

    async fn load_rows(&self) -> CoreResult<Vec<StoredRow>> {
        let rows = task::Entity::find()
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query tasks: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| StoredRow::new(RowId::new(i64::from(row.id)), row.task))
            .collect())
    }

    async fn delete_by_text(&self, text: &str) -> CoreResult<()> {
        let first = task::Entity::find()
            .filter(task::Column::Task.eq(text))
            .order_by_asc(task::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query task: {e}")))?;

        let Some(row) = first else {
            log::debug!("No stored task matches, nothing to delete");
            return Ok(());
        };

        task::Entity::delete_by_id(row.id)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete task: {e}")))?;

        Ok(())
    }

    async fn count(&self) -> CoreResult<usize> {
        let count = task::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to count tasks: {e}")))?;

        usize::try_from(count).map_err(|e| CoreError::StorageError(e.to_string()))
    }
}
