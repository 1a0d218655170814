//! 位置指示器，例如 `3 / 5`

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};
use slides_core::Position;

use crate::view::theme::colors;

pub fn render(position: Position, frame: &mut Frame, area: Rect) {
    let text = format!("{position} ");
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Right)
        .style(ratatui::style::Style::default().fg(colors().muted));
    frame.render_widget(paragraph, area);
}
