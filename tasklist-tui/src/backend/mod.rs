//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置、文件位置和存储的启动。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod core_service;       // 核心服务入口（打开存储 + 启动流程）
//!         pub mod paths;          // 数据库/配置/日志文件位置
//!
//!
//!     启动流程（在 main.rs 中，终端初始化之前）：
//!
//!         LocalConfigService::load()
//!             ↓
//!         CoreService::new(config).bootstrap()
//!             ↓
//!         SqliteStore::connect → AppStateBuilder::build → AppState::run_startup
//!             ↓
//!         得到已填充的 AppState，交给 model::App
//!
//!     运行期间的增删由 Update 层直接调用 AppState 中的 TaskListService 完成。
//!

mod config_service;
mod core_service;
pub mod paths;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
