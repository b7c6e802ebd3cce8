//! 输入区组件

use hanz_reader_client::InputMode;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染当前可见的输入区
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let view = app.view();

    let mode = view.visible_section;
    let input = view.input(mode);
    let focused = view.focused == mode && !app.show_help;

    let (title, placeholder) = match mode {
        InputMode::Url => (texts.input.url_title, texts.input.url_placeholder),
        InputMode::Text => (texts.input.text_title, texts.input.text_placeholder),
    };

    let border_style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // 保证光标始终在可见区域内
    let (row, col) = input.cursor_position();
    let scroll_y = row.saturating_sub(usize::from(inner.height - 1));
    let scroll_x = col.saturating_sub(usize::from(inner.width - 1));

    if input.is_empty() {
        let hint = Paragraph::new(placeholder).style(Style::default().fg(c.muted));
        frame.render_widget(hint, inner);
    } else {
        let lines: Vec<Line> = input.value().split('\n').map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(c.fg))
            .scroll((to_u16(scroll_y), to_u16(scroll_x)));
        frame.render_widget(paragraph, inner);
    }

    if focused {
        let x = inner.x.saturating_add(to_u16(col - scroll_x));
        let y = inner.y.saturating_add(to_u16(row - scroll_y));
        frame.set_cursor_position((x, y));
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
