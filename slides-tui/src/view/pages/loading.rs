//! 加载页

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::components;
use crate::view::theme::colors;

pub fn render(app: &App, url: &str, frame: &mut Frame, area: Rect) {
    let [body, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(body);

    frame.render_widget(
        Paragraph::new(format!("Loading {url} …"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors().fg)),
        line,
    );

    components::statusbar::render(app, frame, status);
}
