//! Task List TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与存储启动 (`backend/`)
//!
//!
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件
//!     LocalConfigService      // 读取配置，设置语言
//!     CoreService::bootstrap  // 打开数据库并加载任务；失败则直接退出，不进入界面
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//! 整个程序运行在单线程的 tokio 运行时上。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{paths, ConfigService, CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    let log_path = paths::log_file();
    if let Err(e) = init_logging(&log_path) {
        eprintln!("warning: logging disabled ({}): {e:#}", log_path.display());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // 1. 加载配置
    let config_service = LocalConfigService::new(paths::config_file());
    let config = config_service
        .load()
        .with_context(|| format!("cannot load config {}", config_service.path().display()))?;
    if !config_service.path().exists() {
        // 首次运行写出默认配置，便于用户修改
        if let Err(e) = config_service.save(&config) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
    i18n::set_language(config.language());

    // 2. 打开存储并加载任务（在终端初始化之前）
    let core = CoreService::new(config);
    let (state, report) = runtime.block_on(core.bootstrap()).map_err(|e| {
        tracing::error!(error = %e, "Startup failed");
        anyhow::Error::new(e).context(format!(
            "cannot open task database {}",
            core.database_path().display()
        ))
    })?;
    tracing::info!(
        loaded = report.seeded_entries,
        stored = report.stored_rows,
        "Task list ready"
    );

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例并运行主循环
    let mut app = model::App::new(state);
    let result = runtime.block_on(app::run(&mut terminal, &mut app));

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
