//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。按当前屏幕分发到 pages/ 下的页面，
//! components/ 存放各页面共用的部件。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

pub use layout::ViewerLayout;

use crate::model::{App, Screen};

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let background = ratatui::widgets::Block::default().style(
        ratatui::style::Style::default()
            .bg(theme::colors().bg)
            .fg(theme::colors().fg),
    );
    frame.render_widget(background, area);

    match &app.screen {
        Screen::Form => pages::form::render(app, frame, area),
        Screen::Loading { url, .. } => pages::loading::render(app, url, frame, area),
        Screen::Viewer(state) => pages::viewer::render(app, state, frame, area),
    }
}
