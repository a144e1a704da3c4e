//! 输入框消息类型

/// 输入框相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
    /// 输入字符
    Insert(char),
    /// 删除光标前的字符（Backspace）
    Backspace,
    /// 删除光标后的字符（Delete）
    Delete,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    /// 清空输入框
    Clear,
    /// 提交（Enter）
    Submit,
}
