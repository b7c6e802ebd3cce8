//! 结果区组件
//!
//! 同一时刻只显示加载、错误、结果三者之一（都没有时显示提示）。

use hanz_reader_client::{CoverageLevel, CoverageRow, InputMode, ResultsModel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, ThemeColors};

/// 加载动画帧
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 覆盖率条左侧标签宽度
const LEVEL_LABEL_WIDTH: u16 = 10;

/// 结果头部（标题、来源、统计）的行数
const HEADER_HEIGHT: u16 = 6;

/// 渲染结果区
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let view = app.view();

    let block = Block::default()
        .title(format!(" {} ", texts.results.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.loading {
        render_loading(app.tick, &c, frame, inner);
    } else if let Some(error) = &view.error {
        render_error(error, &c, frame, inner);
    } else if let Some(results) = &view.results {
        render_results(results, &c, frame, inner);
    } else {
        render_hint(view.active_mode, &c, frame, inner);
    }
}

fn render_loading(tick: usize, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let spinner = SPINNER[tick % SPINNER.len()];
    let line = Line::from(vec![
        Span::styled(format!(" {spinner} "), Style::default().fg(c.warning)),
        Span::styled(t().results.analyzing, Style::default().fg(c.fg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_error(message: &str, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            format!(" ✗ {}", t().results.error_title),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!(" {message}"), Style::default().fg(c.error)),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_hint(mode: InputMode, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let hint = match mode {
        InputMode::Url => t().results.empty_hint_url,
        InputMode::Text => t().results.empty_hint_text,
    };
    let paragraph = Paragraph::new(format!(" {hint}")).style(Style::default().fg(c.muted));
    frame.render_widget(paragraph, area);
}

fn render_results(results: &ResultsModel, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let texts = t();

    // 头部 + 每个覆盖率条一行
    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT)];
    constraints.extend(results.bars.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let label = Style::default().fg(c.muted);
    let value = Style::default().fg(c.fg).add_modifier(Modifier::BOLD);

    let header = vec![
        Line::styled(
            format!(" {}", results.title),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(format!(" {}: ", texts.results.source), label),
            Span::styled(results.source.clone(), Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {}: ", texts.results.score), label),
            Span::styled(results.score.clone(), Style::default().fg(c.success).add_modifier(Modifier::BOLD)),
            Span::styled(format!("   {}: ", texts.results.tokens), label),
            Span::styled(results.tokens.clone(), value),
            Span::styled(format!("   {}: ", texts.results.unknown_coverage), label),
            Span::styled(results.unknown_percent.clone(), value),
        ]),
        Line::from(""),
        Line::styled(
            format!(" {}", texts.results.coverage),
            Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED),
        ),
    ];
    frame.render_widget(Paragraph::new(header), rows[0]);

    for (row, bar_area) in results.bars.iter().zip(rows.iter().skip(1)) {
        render_bar(row, c, frame, *bar_area);
    }
}

/// 渲染一行覆盖率条
fn render_bar(row: &CoverageRow, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LEVEL_LABEL_WIDTH), Constraint::Min(1)])
        .split(area);

    let level_label = match row.level {
        CoverageLevel::Unknown => t().results.unknown_level.to_string(),
        level @ CoverageLevel::Hsk(_) => level.label(),
    };
    frame.render_widget(
        Paragraph::new(format!(" {level_label}")).style(Style::default().fg(c.fg)),
        columns[0],
    );

    // Gauge 只接受 0..=1，标签保留原始百分比
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(c.coverage(row.level)).bg(c.border))
        .ratio(row.width_ratio())
        .label(Span::styled(row.percent.clone(), Style::default().fg(c.selected_fg)))
        .use_unicode(true);
    frame.render_widget(gauge, columns[1]);
}
