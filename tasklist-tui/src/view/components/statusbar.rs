//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和弹窗生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => {
            return vec![("←→", hints.select), ("Enter", hints.confirm), ("Esc", hints.close)];
        }
        Some(_) => return vec![("Esc", hints.close)],
        None => {}
    }

    let mut result = vec![("Tab", hints.switch_focus)];

    match app.focus {
        FocusPanel::Input => {
            result.push(("Enter", hints.add));
        }
        FocusPanel::List => {
            result.push(("↑↓", hints.select));
            result.push(("Del", hints.delete));
        }
    }

    result.push(("F1", hints.help));
    result.push(("Alt+q", hints.quit));

    result
}
