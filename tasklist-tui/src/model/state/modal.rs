//! 弹窗/对话框状态

use tasklist_core::TaskEntry;

use crate::i18n::{t, Translations};

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认删除
    ConfirmDelete {
        /// 待删除的条目（删除时按 ID 在列表中查找）
        entry: TaskEntry,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

impl Modal {
    /// 确认删除弹窗的提示文本：`Delete '<text>'?`
    pub fn delete_prompt(text: &str) -> String {
        Self::delete_prompt_with(t(), text)
    }

    fn delete_prompt_with(translations: &Translations, text: &str) -> String {
        let texts = &translations.modal.confirm_delete;
        format!("{}{text}{}", texts.prompt_prefix, texts.prompt_suffix)
    }
}

/// 弹窗状态容器
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗，焦点默认在“取消”
    pub fn show_confirm_delete(&mut self, entry: TaskEntry) {
        self.active = Some(Modal::ConfirmDelete { entry, focus: 0 });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
