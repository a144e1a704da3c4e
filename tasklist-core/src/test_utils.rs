//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。
//! 其他 crate 通过 `test-utils` feature 在测试中使用。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::TaskListService;
use crate::traits::{InMemoryTaskStore, TaskStore};
use crate::types::{RowId, StoredRow};

// ===== FailingTaskStore =====

/// `FailingTaskStore` 写失败时的错误信息
pub const FAILED_WRITE: &str = "database is locked";

/// 可以让写操作失败的存储（用于测试持久化失败路径）
#[derive(Default)]
pub struct FailingTaskStore {
    inner: InMemoryTaskStore,
    fail_writes: RwLock<bool>,
}

impl FailingTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    async fn check_writable(&self) -> CoreResult<()> {
        if *self.fail_writes.read().await {
            return Err(CoreError::StorageError(FAILED_WRITE.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for FailingTaskStore {
    async fn initialize(&self) -> CoreResult<()> {
        self.inner.initialize().await
    }

    async fn append_row(&self, text: &str) -> CoreResult<RowId> {
        self.check_writable().await?;
        self.inner.append_row(text).await
    }

    async fn delete_row(&self, id: RowId) -> CoreResult<()> {
        self.check_writable().await?;
        self.inner.delete_row(id).await
    }

    async fn load_rows(&self) -> CoreResult<Vec<StoredRow>> {
        self.inner.load_rows().await
    }

    async fn delete_by_text(&self, text: &str) -> CoreResult<()> {
        self.check_writable().await?;
        self.inner.delete_by_text(text).await
    }
}

// ===== Factories =====

/// 创建基于内存存储的任务列表服务
pub fn create_test_service() -> (TaskListService, Arc<InMemoryTaskStore>) {
    let store = Arc::new(InMemoryTaskStore::new());
    let svc = TaskListService::new(store.clone());
    (svc, store)
}

/// 列表中所有任务的文本
pub fn texts(svc: &TaskListService) -> Vec<String> {
    svc.all().iter().map(|e| e.text.clone()).collect()
}
