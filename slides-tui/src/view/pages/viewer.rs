//! 放映页
//!
//! 过渡动画按进度 `p` 水平平移：
//! - 前进：离开的 slide 左移 `p·w`，当前 slide 从右侧 `(1-p)·w` 处滑入
//! - 后退：方向相反
//!
//! 文本先按 slide 宽度折好行，再整体平移，右移时截去右侧，左移时用横向滚动截去左侧。

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use slides_core::RenderTag;
use unicode_width::UnicodeWidthStr;

use crate::model::{App, ViewerState};
use crate::util::markup::{LineKind, SlideLine, wrap};
use crate::view::ViewerLayout;
use crate::view::components;
use crate::view::theme::{Styles, colors};

const BULLET: &str = "• ";

pub fn render(app: &App, state: &ViewerState, frame: &mut Frame, area: Rect) {
    let layout = ViewerLayout::compute(area);
    let nav = &state.navigator;

    frame.render_widget(
        Paragraph::new(format!(" {}", state.title())).style(Styles::title_bar()),
        layout.title,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border));
    let content = block.inner(layout.slide).inner(Margin::new(2, 1));
    frame.render_widget(block, layout.slide);

    let progress = nav.transition_progress();
    // 离开的 slide 先画，当前 slide 覆盖在上
    let mut visible: Vec<(usize, RenderTag)> = nav
        .render_tags()
        .into_iter()
        .enumerate()
        .filter(|(_, tag)| tag.is_visible())
        .collect();
    visible.sort_by_key(|(_, tag)| *tag == RenderTag::Current);

    for (index, tag) in visible {
        let offset = slide_offset(tag, progress, state, content.width);
        let lines = slide_text(state.lines(index), content.width);
        render_shifted(frame, lines, content, offset);
    }

    render_button(frame, layout.prev_button, "◀ Prev", nav.can_go_prev());
    render_button(frame, layout.next_button, "Next ▶", nav.can_go_next());
    components::indicator::render(nav.position(), frame, layout.indicator);
    components::statusbar::render(app, frame, layout.status);
}

/// 水平偏移（列），负数表示左移
fn slide_offset(tag: RenderTag, progress: Option<f32>, state: &ViewerState, width: u16) -> i32 {
    let Some(p) = progress else {
        return 0;
    };
    let w = f32::from(width);
    let forward = state
        .navigator
        .state()
        .prev_index()
        .is_some_and(|prev| prev < state.navigator.state().current_index());

    #[allow(clippy::cast_possible_truncation)]
    let columns = |fraction: f32| (fraction * w).round() as i32;

    match tag {
        RenderTag::Current if forward => columns(1.0 - p),
        RenderTag::Current => -columns(1.0 - p),
        RenderTag::Prev => -columns(p),
        RenderTag::Next => columns(p),
        RenderTag::PrevHidden | RenderTag::NextHidden => 0,
    }
}

/// 把 slide 行折成终端行
fn slide_text(lines: &[SlideLine], width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let indent = BULLET.width();
    let mut out = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        match line.kind {
            LineKind::Heading => {
                if i > 0 {
                    out.push(Line::default());
                }
                out.extend(
                    wrap(&line.text, width)
                        .into_iter()
                        .map(|l| Line::from(Span::styled(l, Styles::heading()))),
                );
                out.push(Line::default());
            }
            LineKind::Item => {
                for (j, l) in wrap(&line.text, width.saturating_sub(indent))
                    .into_iter()
                    .enumerate()
                {
                    let lead = if j == 0 { BULLET } else { "  " };
                    out.push(Line::from(vec![
                        Span::styled(lead, Style::default().fg(colors().highlight)),
                        Span::raw(l),
                    ]));
                }
            }
            LineKind::Body => {
                out.extend(wrap(&line.text, width).into_iter().map(Line::from));
            }
        }
    }
    out
}

fn render_shifted(frame: &mut Frame, lines: Vec<Line<'static>>, area: Rect, offset: i32) {
    let shift = u16::try_from(offset.unsigned_abs()).unwrap_or(u16::MAX);
    if shift >= area.width {
        return;
    }
    let paragraph = Paragraph::new(lines);
    if offset >= 0 {
        let target = Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        };
        frame.render_widget(paragraph, target);
    } else {
        frame.render_widget(paragraph.scroll((0, shift)), area);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Styles::button()
    } else {
        Styles::button_disabled()
    };
    frame.render_widget(
        Paragraph::new(label)
            .alignment(ratatui::layout::Alignment::Center)
            .style(style),
        area,
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn line(kind: LineKind, text: &str) -> SlideLine {
        SlideLine {
            kind,
            text: text.to_string(),
        }
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_slide_text_layout() {
        let lines = slide_text(
            &[
                line(LineKind::Heading, "Title"),
                line(LineKind::Item, "one two"),
                line(LineKind::Body, "tail"),
            ],
            20,
        );
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(rendered, vec!["Title", "", "• one two", "tail"]);
    }

    #[test]
    fn test_item_continuation_indented() {
        let lines = slide_text(&[line(LineKind::Item, "aaaa bbbb")], 6);
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(rendered, vec!["• aaaa", "  bbbb"]);
    }
}
