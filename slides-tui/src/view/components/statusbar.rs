//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, Screen};
use crate::view::theme::{Styles, colors};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(&app.screen);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息跟在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled(msg.clone(), Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前屏幕生成快捷键提示
fn get_hints(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    match screen {
        Screen::Form => vec![("Enter", "Open"), ("Esc", "Clear"), ("Ctrl+C", "Quit")],
        Screen::Loading { .. } => vec![("Esc", "Cancel"), ("Ctrl+C", "Quit")],
        Screen::Viewer(_) => vec![
            ("←→", "Slide"),
            ("Home/End", "First/Last"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
    }
}
