//! 主消息类型

use super::{InputMessage, ListMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 切换焦点（输入框 ↔ 列表）
    ToggleFocus,
    /// 显示帮助
    ShowHelp,
    /// 终端窗口大小改变
    Resize { width: u16, height: u16 },
    /// 输入框子消息
    Input(InputMessage),
    /// 任务列表子消息
    List(ListMessage),
    /// 弹窗子消息
    Modal(ModalMessage),
    /// 无操作
    Noop,
}
