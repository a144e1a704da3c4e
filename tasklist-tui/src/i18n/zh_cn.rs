//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, ConfirmDeleteTexts, HelpTexts, HintTexts, InputTexts, ModalTexts, StatusTexts,
    TaskTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "待办清单",
        cancel: "取消",
        delete: "删除",
        error: "错误",
    },

    hints: HintTexts {
        switch_focus: "切换焦点",
        select: "选择",
        add: "添加",
        delete: "删除",
        help: "帮助",
        quit: "退出",
        close: "关闭",
        confirm: "确认",
    },

    tasks: TaskTexts {
        title: "任务",
        empty: "暂无任务，在下方输入并按 Enter 添加",
    },

    input: InputTexts {
        title: "新任务",
        placeholder: "输入任务后按 Enter",
    },

    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "确认删除？",
            prompt_prefix: "删除 '",
            prompt_suffix: "'？",
        },
        help: HelpTexts {
            title: "帮助",
            section_input: "输入框",
            section_list: "任务列表",
            section_global: "全局",
            add_task: "添加任务",
            edit_text: "移动光标 / 编辑",
            move_selection: "移动选中项",
            jump: "跳转 / 翻页",
            delete_task: "删除选中任务",
            click_delete: "删除点击的任务",
            scroll: "滚动列表",
            switch_focus: "切换焦点",
            help: "显示帮助",
            quit: "退出",
            close_hint: "按 Esc 关闭帮助",
        },
        error_close_hint: "按 Esc 或 Enter 关闭",
    },

    status: StatusTexts {
        added: "任务已添加",
        deleted: "任务已删除",
        duplicate: "任务已存在",
        not_saved: "任务已添加，但未保存",
        not_removed: "任务已移除，但仍在数据库中",
    },
};
