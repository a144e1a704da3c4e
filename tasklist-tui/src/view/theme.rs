//! 主题和样式定义

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_fg: Color::White,
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

/// 解析配置中的颜色
///
/// 支持 `#rrggbb`、ratatui 能识别的颜色名，以及 `grey` / `lightgrey`
/// 这类按 X11 色值解释的名称。无法识别时返回 `Color::Reset`。
pub fn parse_color(value: &str) -> Color {
    let name = value.trim().to_ascii_lowercase();
    match name.as_str() {
        "grey" | "gray" => Color::Rgb(190, 190, 190),
        "lightgrey" | "lightgray" => Color::Rgb(211, 211, 211),
        "darkgrey" | "darkgray" => Color::Rgb(169, 169, 169),
        _ => Color::from_str(&name).unwrap_or_else(|_| {
            log::warn!("Unknown color '{value}', using terminal default");
            Color::Reset
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_names_resolve() {
        assert_eq!(parse_color("lightgrey"), Color::Rgb(211, 211, 211));
        assert_eq!(parse_color("grey"), Color::Rgb(190, 190, 190));
        assert_eq!(parse_color("black"), Color::Black);
        assert_eq!(parse_color("White"), Color::White);
    }

    #[test]
    fn hex_colors_resolve() {
        assert_eq!(parse_color("#1e1e1e"), Color::Rgb(30, 30, 30));
    }

    #[test]
    fn unknown_color_is_reset() {
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }
}
