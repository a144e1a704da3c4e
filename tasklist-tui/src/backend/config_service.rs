//! 配置服务
//!
//! 配置保存在 JSON 文件中，缺失的字段使用默认值。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tasklist_core::render::{Scheme, StyleConfig, ViewportConfig};
use tasklist_core::{CoreError, CoreResult};

use crate::i18n::Language;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 界面语言代码（`en-US` / `zh-CN`）
    pub language: String,
    /// 交替行配色
    pub schemes: Vec<Scheme>,
    /// 每行高度（终端行数）
    pub row_height: u32,
    /// 每格滚轮滚动的行数
    pub scroll_step: u32,
    /// 是否拒绝重复任务
    pub reject_duplicates: bool,
    /// 数据库文件路径，未设置时使用默认位置
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let viewport = ViewportConfig::default();
        Self {
            language: Language::default().code().to_string(),
            schemes: StyleConfig::default().schemes,
            row_height: viewport.row_height,
            scroll_step: viewport.scroll_step,
            reject_duplicates: false,
            database_path: None,
        }
    }
}

impl AppConfig {
    pub fn style_config(&self) -> StyleConfig {
        StyleConfig {
            schemes: self.schemes.clone(),
        }
    }

    pub fn viewport_config(&self) -> ViewportConfig {
        ViewportConfig {
            row_height: self.row_height,
            scroll_step: self.scroll_step,
        }
    }

    /// 解析语言代码，无法识别时回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', falling back to default", self.language);
            Language::default()
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> CoreResult<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> CoreResult<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> CoreResult<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", self.path.display())))?;

        serde_json::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, config: &AppConfig) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::ConfigError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| CoreError::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(tmp.path().join("config.json"));

        let config = service.load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.schemes.len(), 2);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(tmp.path().join("nested").join("config.json"));
        let config = AppConfig {
            language: "zh-CN".to_string(),
            reject_duplicates: true,
            database_path: Some(tmp.path().join("tasks.db")),
            ..AppConfig::default()
        };

        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "rowHeight": 2 }"#).unwrap();

        let config = LocalConfigService::new(&path).load().unwrap();

        assert_eq!(config.row_height, 2);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.viewport_config().scroll_step, 1);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = LocalConfigService::new(&path).load();

        assert!(matches!(result, Err(CoreError::ConfigError(_))));
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }
}
