//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ConfirmDeleteTexts, HelpTexts, HintTexts, InputTexts, ModalTexts, StatusTexts,
    TaskTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "To-Do List",
        cancel: "Cancel",
        delete: "Delete",
        error: "Error",
    },

    hints: HintTexts {
        switch_focus: "Switch Focus",
        select: "Select",
        add: "Add",
        delete: "Delete",
        help: "Help",
        quit: "Quit",
        close: "Close",
        confirm: "Confirm",
    },

    tasks: TaskTexts {
        title: "Tasks",
        empty: "No tasks. Type below and press Enter.",
    },

    input: InputTexts {
        title: "New Task",
        placeholder: "Type a task and press Enter",
    },

    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Really delete?",
            prompt_prefix: "Delete '",
            prompt_suffix: "'?",
        },
        help: HelpTexts {
            title: "Help",
            section_input: "Input box",
            section_list: "Task list",
            section_global: "Global",
            add_task: "Add task",
            edit_text: "Move cursor / edit",
            move_selection: "Move selection",
            jump: "Jump / page",
            delete_task: "Delete selected task",
            click_delete: "Delete clicked task",
            scroll: "Scroll list",
            switch_focus: "Switch focus",
            help: "Show this help",
            quit: "Quit",
            close_hint: "Press Esc to close the help",
        },
        error_close_hint: "Press Esc or Enter to close",
    },

    status: StatusTexts {
        added: "Task added",
        deleted: "Task deleted",
        duplicate: "Task already exists",
        not_saved: "Task added but not saved",
        not_removed: "Task removed but still stored",
    },
};
