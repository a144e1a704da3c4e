//! 文件位置
//!
//! 默认位置基于 `dirs` 提供的平台目录，可用环境变量覆盖。

use std::path::{Path, PathBuf};

/// 应用目录名
const APP_DIR: &str = "tasklist";

/// 覆盖数据库路径的环境变量
pub const DB_ENV: &str = "TASKLIST_DB";

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "TASKLIST_CONFIG";

/// 获取数据目录路径
fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 读取非空的环境变量路径
fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// 配置文件路径
pub fn config_file() -> PathBuf {
    env_path(CONFIG_ENV).unwrap_or_else(|| get_config_dir().join("config.json"))
}

/// 日志文件路径
pub fn log_file() -> PathBuf {
    get_data_dir().join("tasklist.log")
}

/// 数据库文件路径：环境变量 > 配置文件 > 默认位置
pub fn database_file(configured: Option<&Path>) -> PathBuf {
    resolve_database_file(env_path(DB_ENV), configured)
}

fn resolve_database_file(from_env: Option<PathBuf>, configured: Option<&Path>) -> PathBuf {
    from_env
        .or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(|| get_data_dir().join("tasks.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let path = resolve_database_file(
            Some(PathBuf::from("/tmp/env.db")),
            Some(Path::new("/tmp/config.db")),
        );
        assert_eq!(path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn configured_path_beats_default() {
        let path = resolve_database_file(None, Some(Path::new("/tmp/config.db")));
        assert_eq!(path, PathBuf::from("/tmp/config.db"));
    }

    #[test]
    fn default_lives_under_app_dir() {
        let path = resolve_database_file(None, None);
        assert!(path.ends_with("tasklist/tasks.db"));
    }
}
