//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     mod logging;        // 文件日志
//!     mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端（init_terminal）：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲与回显，每个按键立即生效
//!         · Alternate Screen（备用屏幕）
//!             - 退出后恢复主屏幕内容
//!         · Mouse Capture（鼠标捕获）
//!             - 接收滚轮和点击事件，用于滚动列表和点击删除
//!
//!     恢复终端（restore_terminal）：
//!         无论主循环成功还是出错，都必须调用，
//!         否则终端会保持在原始模式。
//!
//!     在 main.rs 中，存储打开失败时终端从未被初始化，
//!     错误直接打印到 stderr。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
