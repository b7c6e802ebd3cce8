//! 模式选项卡

use hanz_reader_client::InputMode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染模式选项卡，只有一个处于激活状态
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let titles: Vec<Line> = InputMode::all()
        .iter()
        .map(|mode| {
            let label = match mode {
                InputMode::Url => texts.tabs.url,
                InputMode::Text => texts.tabs.text,
            };
            Line::from(format!(" {label} "))
        })
        .collect();

    let selected = InputMode::all()
        .iter()
        .position(|m| *m == app.view().active_mode)
        .unwrap_or_default();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(c.muted))
        .highlight_style(
            Style::default()
                .fg(c.selected_fg)
                .bg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
