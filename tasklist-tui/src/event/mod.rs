//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标/窗口事件转换为 Message。
//!
//!
//!     handle_event 接收以下 Event 类型：
//!         Event::Key(KeyEvent)            // 键盘事件
//!         Event::Mouse(MouseEvent)        // 滚轮 → ListMessage::Scroll，左键点击 → ListMessage::Click
//!         Event::Resize(width, height)    // → AppMessage::Resize
//!
//!     当接收到键盘事件时，判断：
//!         - 有弹窗打开时，调用 handle_modal_keys 处理（其余按键一律忽略）
//!         - 全局快捷键，就地处理
//!         - 焦点位于输入框，调用 handle_input_keys 处理
//!         - 焦点位于任务列表，调用 handle_list_keys 处理
//!
//!     弹窗打开时鼠标事件同样被忽略。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
