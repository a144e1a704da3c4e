//! 核心服务
//!
//! 按配置打开 SQLite 存储并完成启动流程，
//! 得到提供给 TUI 层使用的 `AppState`。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tasklist_app::adapters::SqliteStore;
use tasklist_app::{AppState, AppStateBuilder, StartupReport};
use tasklist_core::CoreResult;

use super::config_service::AppConfig;
use super::paths;

/// TUI 核心服务
pub struct CoreService {
    config: AppConfig,
    database_path: PathBuf,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(config: AppConfig) -> Self {
        let database_path = paths::database_file(config.database_path.as_deref());
        Self {
            config,
            database_path,
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// 打开存储并加载任务
    ///
    /// 应在终端切换到备用屏幕之前调用；失败时不应显示界面。
    pub async fn bootstrap(&self) -> CoreResult<(AppState, StartupReport)> {
        log::info!("Opening task database at {}", self.database_path.display());

        let store = SqliteStore::connect(&self.database_path).await?;

        let mut state = AppStateBuilder::new()
            .store(Arc::new(store))
            .style_config(self.config.style_config())
            .viewport_config(self.config.viewport_config())
            .reject_duplicates(self.config.reject_duplicates)
            .build()?;

        let report = state.run_startup().await?;
        Ok((state, report))
    }
}
