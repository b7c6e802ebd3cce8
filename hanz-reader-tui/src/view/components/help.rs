//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::colors;

/// 快捷键列宽
const KEY_COLUMN_WIDTH: usize = 22;

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let texts = t();
    let c = colors();

    let shortcuts = texts.help.shortcuts;
    // 快捷键行 + 空行 + 关闭提示 + 边框
    let height = u16::try_from(shortcuts.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(64, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let mut lines: Vec<Line> = shortcuts
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<KEY_COLUMN_WIDTH$}"),
                    Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(c.fg)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::styled(
        texts.help.close_hint,
        Style::default().fg(c.muted),
    ).alignment(Alignment::Center));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
