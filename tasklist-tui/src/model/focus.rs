//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 底部输入框
    #[default]
    Input,
    /// 任务列表
    List,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Input => FocusPanel::List,
            FocusPanel::List => FocusPanel::Input,
        }
    }

    /// 是否是输入框
    pub fn is_input(self) -> bool {
        matches!(self, FocusPanel::Input)
    }

    /// 是否是任务列表
    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }
}
