//! 日志初始化
//!
//! stdout 属于终端界面，日志写入文件。
//! 库中 `log` 宏产生的记录经由 tracing-subscriber 的 `tracing-log` 桥接进入同一个文件。

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化文件日志，级别由 `RUST_LOG` 控制，默认 `info`
pub fn init_logging(path: &Path) -> Result<()> {
    let appender = file_appender(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(appender)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}

/// 不轮转的单文件 appender，目录不存在时自动创建
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("invalid log file path {}", path.display()))?;

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appender_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("tasklist.log");

        file_appender(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        assert!(file_appender(Path::new("/")).is_err());
    }
}
