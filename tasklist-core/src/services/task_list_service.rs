//! 任务列表模型
//!
//! 内存中的有序任务列表。每个条目与界面上的一行、存储中的一条记录一一对应。
//! 只有本服务会修改列表顺序；界面和存储只读取它。

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::TaskStore;
use crate::types::{StoredRow, TaskChange, TaskEntry, TaskId};

/// 任务列表服务
pub struct TaskListService {
    store: Arc<dyn TaskStore>,
    entries: Vec<TaskEntry>,
    next_id: u64,
    reject_duplicates: bool,
}

impl TaskListService {
    /// 创建空列表
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            entries: Vec::new(),
            next_id: 0,
            reject_duplicates: false,
        }
    }

    /// 设置是否拒绝重复文本
    #[must_use]
    pub fn with_duplicate_rejection(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }

    /// 底层存储
    pub fn store(&self) -> &Arc<dyn TaskStore> {
        &self.store
    }

    /// 用存储中读出的行填充列表（不写回存储）
    ///
    /// 按接收顺序追加，每个条目记住自己的存储记录；空白行会被跳过。
    /// 返回实际加入的条目数。
    pub fn seed<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = StoredRow>,
    {
        let mut seeded = 0;
        for row in rows {
            let text = row.text.trim();
            if text.is_empty() {
                log::warn!("Skipping blank task row {} read from storage", row.id.value());
                continue;
            }
            let entry = self.make_entry(text).with_row(row.id);
            self.entries.push(entry);
            seeded += 1;
        }
        seeded
    }

    /// 从存储读取全部行并填充列表
    pub async fn load_from_store(&mut self) -> CoreResult<usize> {
        let rows = self.store.load_rows().await?;
        Ok(self.seed(rows))
    }

    /// 添加任务
    ///
    /// 文本去除首尾空白后为空时不做任何事，返回 `Ok(None)`。
    /// 内存列表先更新；写入存储失败不会回滚，错误放在 `TaskChange::persist_error`。
    pub async fn add_task(&mut self, text: &str) -> CoreResult<Option<TaskChange>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        if self.reject_duplicates && self.entries.iter().any(|e| e.text == text) {
            return Err(CoreError::DuplicateTask(text.to_string()));
        }

        let mut entry = self.make_entry(text);
        let persist_error = match self.store.append_row(&entry.text).await {
            Ok(row) => {
                entry.row = Some(row);
                log::debug!("Added task {} at position {}", entry.id, self.entries.len());
                None
            }
            Err(e) => {
                log::warn!("Task {} kept in memory but not persisted: {e}", entry.id);
                Some(e)
            }
        };
        self.entries.push(entry.clone());

        Ok(Some(TaskChange {
            entry,
            persist_error,
        }))
    }

    /// 按 ID 删除任务，并删除它对应的那条存储记录
    ///
    /// 文本重复时也只删除这一条，存储顺序与列表顺序保持一致。
    /// 从未写入存储的条目只从内存中移除。
    ///
    /// # Errors
    /// 条目不在列表中时返回 `CoreError::InvalidEntry`。
    pub async fn remove_task(&mut self, entry: &TaskEntry) -> CoreResult<TaskChange> {
        let position = self
            .position_of(entry.id)
            .ok_or(CoreError::InvalidEntry(entry.id))?;
        let removed = self.entries.remove(position);

        let persist_error = match removed.row {
            Some(row) => self.store.delete_row(row).await.err(),
            None => {
                log::debug!("Task {} was never persisted, nothing to delete", removed.id);
                None
            }
        };
        if let Some(ref e) = persist_error {
            log::warn!("Task {} removed from memory but not from storage: {e}", removed.id);
        } else {
            log::debug!("Removed task {} from position {position}", removed.id);
        }

        Ok(TaskChange {
            entry: removed,
            persist_error,
        })
    }

    /// 当前有序列表
    pub fn all(&self) -> &[TaskEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按位置获取条目
    pub fn get(&self, index: usize) -> Option<&TaskEntry> {
        self.entries.get(index)
    }

    /// 条目当前位置（派生值，每次变更后都可能不同）
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn find(&self, id: TaskId) -> Option<&TaskEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn make_entry(&mut self, text: &str) -> TaskEntry {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        TaskEntry::new(id, text)
    }
}
