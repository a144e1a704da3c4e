//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染当前弹窗
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { entry, focus } => render_confirm_delete(frame, &entry.text, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区域（去掉边框和左右留白）
fn modal_inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(1),
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, text: &str, focus: usize) {
    let texts = t();
    let prompt = Modal::delete_prompt(text);

    let wanted = u16::try_from(prompt.width()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(wanted.clamp(36, 70), 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_delete.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(prompt, Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, modal_inner(area));
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().error))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            t().modal.error_close_hint,
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal_inner(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().modal.help;
    let area = centered_rect(52, 21, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let section =
        |title: &'static str| Line::styled(title, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        section(help.section_input),
        entry("Enter", help.add_task),
        entry("←→ Home End", help.edit_text),
        Line::from(""),
        section(help.section_list),
        entry("↑↓ / jk", help.move_selection),
        entry("PgUp PgDn", help.jump),
        entry("Del / Alt+d", help.delete_task),
        entry("Click", help.click_delete),
        entry("Wheel", help.scroll),
        Line::from(""),
        section(help.section_global),
        entry("Tab", help.switch_focus),
        entry("F1 / Alt+h", help.help),
        entry("Alt+q / Ctrl+C", help.quit),
        Line::from(""),
        Line::styled(help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, modal_inner(area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(50, 8, area), Rect::new(0, 1, 30, 8));
        assert_eq!(centered_rect(10, 4, area), Rect::new(10, 3, 10, 4));
    }
}
