//! 任务列表消息类型

use tasklist_core::render::WheelDelta;

/// 任务列表相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,
    /// 滚轮滚动，只移动视口
    Scroll(WheelDelta),
    /// 鼠标左键点击列表内部，`y` 相对于列表区域顶部
    Click { y: u16 },
    /// 请求删除选中项（打开确认弹窗）
    RequestDelete,
}
