//! 应用主状态结构

use ratatui::layout::Rect;
use tasklist_app::AppState;

use super::{FocusPanel, InputState, ListState, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 存储、任务列表、配色与视口
    pub state: AppState,

    /// 输入框
    pub input: InputState,

    /// 列表选中项
    pub list: ListState,

    /// 任务列表内部区域（屏幕坐标，用于鼠标命中测试）
    pub list_area: Rect,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 用已完成启动流程的 `AppState` 创建应用实例
    pub fn new(state: AppState) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            state,
            input: InputState::default(),
            list: ListState::default(),
            list_area: Rect::default(),
            status_message: None,
            modal: ModalState::new(),
        }
    }

    /// 当前选中的任务索引
    pub fn selected(&self) -> Option<usize> {
        self.list.current(self.state.tasks.len())
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
