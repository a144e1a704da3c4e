//! 底部输入框组件

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染输入框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_input();

    let block = Block::default()
        .title(format!(" {} ", texts.input.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input.is_idle() {
        let hint = Paragraph::new(texts.input.placeholder).style(Style::default().fg(c.muted));
        frame.render_widget(hint, inner);
        if focused && !app.modal.is_open() {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let text = app.input.text();
    let (scroll, cursor_x) = horizontal_scroll(text, app.input.cursor(), inner.width);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(c.fg))
        .scroll((0, scroll));
    frame.render_widget(paragraph, inner);

    if focused && !app.modal.is_open() {
        frame.set_cursor_position(Position::new(inner.x.saturating_add(cursor_x), inner.y));
    }
}

/// 计算水平滚动量和光标在框内的列，保证光标始终可见
fn horizontal_scroll(text: &str, cursor: usize, width: u16) -> (u16, u16) {
    let before: String = text.chars().take(cursor).collect();
    let cursor_col = u16::try_from(before.width()).unwrap_or(u16::MAX);
    let last_col = width.saturating_sub(1);
    let scroll = cursor_col.saturating_sub(last_col);
    (scroll, cursor_col - scroll)
}
