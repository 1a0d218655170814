//! URL 表单页

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::components;
use crate::view::theme::{Styles, colors};

const PLACEHOLDER: &str = "https://example.studio.site/";
const FORM_WIDTH: u16 = 64;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let [body, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(body);
    let [title, hint, input, error] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(2),
    ])
    .flex(Flex::Center)
    .areas(column);

    frame.render_widget(
        Paragraph::new("Section Slides")
            .alignment(Alignment::Center)
            .style(Styles::heading()),
        title,
    );
    frame.render_widget(
        Paragraph::new("Each <section> of the page becomes one slide.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(c.muted)),
        hint,
    );

    // 输入框
    let block = Block::default()
        .title(" URL ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(input);
    frame.render_widget(block, input);

    let form = &app.form;
    let text = if form.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(c.muted)))
    } else {
        Line::from(form.input.as_str())
    };

    // 光标超出可见宽度时整体左移
    let before_cursor: String = form.input.chars().take(form.cursor).collect();
    let cursor_col = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(text).scroll((0, scroll)), inner);
    frame.set_cursor_position(Position::new(inner.x.saturating_add(cursor_col - scroll), inner.y));

    if let Some(message) = &form.error {
        frame.render_widget(
            Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(c.error)),
            error,
        );
    }

    components::statusbar::render(app, frame, status);
}
