//! Platform-agnostic application bootstrap for the task list.
//!
//! Provides `AppState` (store, task list, row styling and viewport),
//! `AppStateBuilder` (adapter injection) and the startup sequence that
//! loads persisted rows before any UI is shown.

pub mod adapters;

use std::sync::Arc;

use tasklist_core::error::{CoreError, CoreResult};
use tasklist_core::render::{StyleConfig, StyleEngine, Viewport, ViewportConfig};
use tasklist_core::services::TaskListService;
use tasklist_core::traits::TaskStore;

/// Summary of a completed startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupReport {
    /// Rows read from the store
    pub stored_rows: usize,
    /// Entries placed into the task list
    pub seeded_entries: usize,
}

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`,
/// then calls [`AppState::run_startup`] before showing the list.
pub struct AppState {
    /// Row store shared with the task list
    pub store: Arc<dyn TaskStore>,
    /// Ordered task list
    pub tasks: TaskListService,
    /// Alternating row styles
    pub styles: StyleEngine,
    /// Scrollable viewport
    pub viewport: Viewport,
    /// Whether the startup sequence has completed
    pub startup_completed: bool,
}

impl AppState {
    /// Run the full startup sequence: initialize store → load rows → seed list.
    ///
    /// The seed path never writes back to the store.
    ///
    /// # Errors
    /// Returns `CoreError::StorageUnavailable` if the store cannot be
    /// initialized or read. The frontend must not show the list in that case.
    pub async fn run_startup(&mut self) -> CoreResult<StartupReport> {
        if self.startup_completed {
            log::warn!("Startup sequence already completed, skipping");
            return Ok(StartupReport {
                stored_rows: self.tasks.len(),
                seeded_entries: 0,
            });
        }

        self.store.initialize().await?;

        let rows = self.store.load_rows().await.map_err(|e| match e {
            CoreError::StorageError(msg) => CoreError::StorageUnavailable(msg),
            other => other,
        })?;
        let stored_rows = rows.len();
        let seeded_entries = self.tasks.seed(rows);
        self.viewport.sync_content(self.tasks.len());
        self.startup_completed = true;

        log::info!("Startup complete: {seeded_entries} of {stored_rows} stored tasks loaded");

        Ok(StartupReport {
            stored_rows,
            seeded_entries,
        })
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `store`: how task rows are persisted
///
/// # Optional
/// - `style_config`: defaults to the two-scheme palette
/// - `viewport_config`: defaults to one unit per row
/// - `reject_duplicates`: defaults to `false`
pub struct AppStateBuilder {
    store: Option<Arc<dyn TaskStore>>,
    style_config: StyleConfig,
    viewport_config: ViewportConfig,
    reject_duplicates: bool,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            style_config: StyleConfig::default(),
            viewport_config: ViewportConfig::default(),
            reject_duplicates: false,
        }
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn TaskStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn style_config(mut self, config: StyleConfig) -> Self {
        self.style_config = config;
        self
    }

    #[must_use]
    pub fn viewport_config(mut self, config: ViewportConfig) -> Self {
        self.viewport_config = config;
        self
    }

    #[must_use]
    pub fn reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the store is missing or the
    /// style configuration has no schemes.
    pub fn build(self) -> CoreResult<AppState> {
        let store = self
            .store
            .ok_or_else(|| CoreError::ValidationError("store is required".to_string()))?;
        let styles = StyleEngine::new(self.style_config)?;
        let tasks = TaskListService::new(Arc::clone(&store))
            .with_duplicate_rejection(self.reject_duplicates);

        Ok(AppState {
            store,
            tasks,
            styles,
            viewport: Viewport::new(self.viewport_config),
            startup_completed: false,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
