//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! Event 层把按键、鼠标和窗口事件翻译成 Message，Update 层根据 Message 更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage：主消息
//!         mod input;      // InputMessage：输入框
//!         mod list;       // ListMessage：任务列表（选中、滚动、点击、删除请求）
//!         mod modal;      // ModalMessage：弹窗
//!
//!
//!     pub enum AppMessage {
//!         Quit,
//!         ToggleFocus,
//!         ShowHelp,
//!         Resize { width, height },
//!         Input(InputMessage),
//!         List(ListMessage),
//!         Modal(ModalMessage),
//!         Noop,                       // 无操作，用于代替 Option::None
//!     }
//!

mod app;
mod input;
mod list;
mod modal;

pub use app::AppMessage;
pub use input::InputMessage;
pub use list::ListMessage;
pub use modal::ModalMessage;
