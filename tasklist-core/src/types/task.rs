//! 任务条目类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 首次运行时写入存储的占位任务
///
/// 它是一条普通任务，可以像其他任务一样被删除。
pub const PLACEHOLDER_TEXT: &str = "--- Add items here ---";

/// 任务 ID（会话内唯一，单调递增）
///
/// 列表位置不是标识：删除后位置会变化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 存储记录 ID（由存储分配，跨重启稳定）
///
/// 文本相同的多条记录靠它区分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(i64);

impl RowId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

/// 从存储读出的一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub id: RowId,
    pub text: String,
}

impl StoredRow {
    #[must_use]
    pub fn new(id: RowId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// 任务条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// 会话内稳定 ID
    pub id: TaskId,
    /// 任务文本（已去除首尾空白，非空）
    pub text: String,
    /// 对应的存储记录；写入存储失败的条目没有
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<RowId>,
}

impl TaskEntry {
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            row: None,
        }
    }

    #[must_use]
    pub fn with_row(mut self, row: RowId) -> Self {
        self.row = Some(row);
        self
    }

    /// 是否为首次运行写入的占位任务
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.text == PLACEHOLDER_TEXT
    }
}

/// 一次列表变更的结果
///
/// 内存中的变更总是生效；持久化失败时错误放在 `persist_error` 中，
/// 由调用方决定如何提示用户。
#[derive(Debug)]
pub struct TaskChange {
    /// 被添加或删除的条目
    pub entry: TaskEntry,
    /// 持久化写入失败时的错误
    pub persist_error: Option<CoreError>,
}

impl TaskChange {
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_detected_by_text() {
        assert!(TaskEntry::new(TaskId::new(0), PLACEHOLDER_TEXT).is_placeholder());
        assert!(!TaskEntry::new(TaskId::new(1), "Buy milk").is_placeholder());
    }

    #[test]
    fn task_id_serializes_as_number() {
        let json = serde_json::to_string(&TaskId::new(7)).unwrap();
        assert_eq!(json, "7");
        assert_eq!(TaskId::new(7).to_string(), "#7");
    }
}
