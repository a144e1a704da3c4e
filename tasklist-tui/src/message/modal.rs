//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（取消）
    Close,

    /// 在确认删除弹窗中切换按钮焦点
    ToggleFocus,

    /// 确认/提交当前焦点按钮
    Confirm,
}
