//! Row store abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::{RowId, StoredRow, PLACEHOLDER_TEXT};

/// Durable ordered collection of task texts
///
/// Each record gets a `RowId` when it is appended. The id is stable across
/// restarts and tells apart records with the same text, so a caller that
/// holds it can delete exactly the record it means. Text-keyed deletion
/// removes the first (earliest inserted) match. Duplicate texts are
/// permitted. Every mutating call must be committed before it returns.
///
/// Platform implementation:
/// - TUI/CLI: `SqliteStore` (`SeaORM`, in `tasklist-app`)
/// - Tests: `InMemoryTaskStore`
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create the backing schema if absent.
    ///
    /// On the first-ever run of a given medium, seeds exactly one
    /// `PLACEHOLDER_TEXT` record. Later calls never seed again, even if
    /// every record has since been deleted.
    ///
    /// # Errors
    /// `CoreError::StorageUnavailable` if the medium cannot be opened or created.
    async fn initialize(&self) -> CoreResult<()>;

    /// Insert one record at the end and return its id
    async fn append_row(&self, text: &str) -> CoreResult<RowId>;

    /// Remove the record with the given id
    ///
    /// No-op if it no longer exists.
    async fn delete_row(&self, id: RowId) -> CoreResult<()>;

    /// Read all records, with ids, in insertion order
    async fn load_rows(&self) -> CoreResult<Vec<StoredRow>>;

    /// Remove the first record whose text equals `text`
    ///
    /// No-op if nothing matches.
    ///
    /// # Arguments
    /// * `text` - Task text
    async fn delete_by_text(&self, text: &str) -> CoreResult<()>;

    /// Insert one record at the end
    ///
    /// # Arguments
    /// * `text` - Task text
    async fn append(&self, text: &str) -> CoreResult<()> {
        self.append_row(text).await.map(|_| ())
    }

    /// Read all record texts in insertion order
    async fn load_all(&self) -> CoreResult<Vec<String>> {
        Ok(self
            .load_rows()
            .await?
            .into_iter()
            .map(|row| row.text)
            .collect())
    }

    /// Number of stored records
    async fn count(&self) -> CoreResult<usize> {
        Ok(self.load_rows().await?.len())
    }
}

/// In-memory row store
///
/// Default implementation, available on all platforms. State lives as long
/// as the value (clones share it), so "first-ever run" means the first
/// `initialize` call on this instance.
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    inner: Arc<RwLock<MemoryRows>>,
}

#[derive(Default)]
struct MemoryRows {
    initialized: bool,
    next_id: i64,
    rows: Vec<StoredRow>,
}

impl MemoryRows {
    fn push(&mut self, text: &str) -> RowId {
        self.next_id += 1;
        let id = RowId::new(self.next_id);
        self.rows.push(StoredRow::new(id, text));
        id
    }
}

impl InMemoryTaskStore {
    /// Create a new, never-initialized memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that behaves as if it had been initialized before
    /// and holds `rows`.
    #[must_use]
    pub fn with_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = MemoryRows {
            initialized: true,
            ..MemoryRows::default()
        };
        for row in rows {
            inner.push(row.as_ref());
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn initialize(&self) -> CoreResult<()> {
        let mut inner = self.inner.write().await;
        if !inner.initialized {
            inner.initialized = true;
            inner.push(PLACEHOLDER_TEXT);
        }
        Ok(())
    }

    async fn append_row(&self, text: &str) -> CoreResult<RowId> {
        Ok(self.inner.write().await.push(text))
    }

    async fn delete_row(&self, id: RowId) -> CoreResult<()> {
        self.inner.write().await.rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn load_rows(&self) -> CoreResult<Vec<StoredRow>> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn delete_by_text(&self, text: &str) -> CoreResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(pos) = inner.rows.iter().position(|row| row.text == text) {
            inner.rows.remove(pos);
        }
        Ok(())
    }

    async fn count(&self) -> CoreResult<usize> {
        Ok(self.inner.read().await.rows.len())
    }
}
