//! 主布局渲染

use hanz_reader_client::InputMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::colors;

/// 文本输入区高度（含边框）
const TEXT_INPUT_HEIGHT: u16 = 10;
/// 网址输入区高度（含边框）
const URL_INPUT_HEIGHT: u16 = 3;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let input_height = match app.view().visible_section {
        InputMode::Url => URL_INPUT_HEIGHT,
        InputMode::Text => TEXT_INPUT_HEIGHT,
    };

    // 标题栏 + 选项卡 + 输入区 + 结果区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(input_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    components::tabs::render(app, frame, main_layout[1]);
    components::input::render(app, frame, main_layout[2]);
    components::results::render(app, frame, main_layout[3]);
    components::statusbar::render(app, frame, main_layout[4]);

    // 帮助弹窗（在最上层）
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION"));
    let title = Paragraph::new(title).style(
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}
