//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：状态栏上的操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 任务列表文本
    pub tasks: TaskTexts,
    /// 输入框文本
    pub input: InputTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 状态栏上的动作说明
pub struct HintTexts {
    pub switch_focus: &'static str,
    pub select: &'static str,
    pub add: &'static str,
    pub delete: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
    pub confirm: &'static str,
}

// ============================================================================
// 任务列表 / 输入框
// ============================================================================

pub struct TaskTexts {
    pub title: &'static str,
    pub empty: &'static str,
}

pub struct InputTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub confirm_delete: ConfirmDeleteTexts,
    pub help: HelpTexts,
    /// 错误弹窗底部提示
    pub error_close_hint: &'static str,
}

/// 确认删除弹窗，提示为 `{prompt_prefix}<text>{prompt_suffix}`
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub prompt_prefix: &'static str,
    pub prompt_suffix: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    pub section_input: &'static str,
    pub section_list: &'static str,
    pub section_global: &'static str,
    pub add_task: &'static str,
    pub edit_text: &'static str,
    pub move_selection: &'static str,
    pub jump: &'static str,
    pub delete_task: &'static str,
    pub click_delete: &'static str,
    pub scroll: &'static str,
    pub switch_focus: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub added: &'static str,
    pub deleted: &'static str,
    pub duplicate: &'static str,
    /// 已加入列表但未写入数据库
    pub not_saved: &'static str,
    /// 已从列表移除但未从数据库删除
    pub not_removed: &'static str,
}
