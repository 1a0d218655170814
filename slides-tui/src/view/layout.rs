//! 放映屏布局
//!
//! 渲染与鼠标命中测试共用同一份计算，按钮的位置只有一个来源。
//!
//! ```text
//! ┌ title ─────────────────────────────────┐
//! │ slide                                  │
//! ├ bar ───── [◀ Prev]  [Next ▶] ── 2 / 5 ─┤
//! └ status ────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// 按钮宽度（含左右各一格留白）
pub const BUTTON_WIDTH: u16 = 8;
const BUTTON_GAP: u16 = 2;
const INDICATOR_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerLayout {
    pub title: Rect,
    pub slide: Rect,
    pub bar: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub indicator: Rect,
    pub status: Rect,
}

impl ViewerLayout {
    pub fn compute(area: Rect) -> Self {
        let [title, slide, bar, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [prev_button, _, next_button] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .flex(Flex::Center)
        .areas(bar);

        let [_, indicator] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(INDICATOR_WIDTH)])
                .areas(bar);

        Self {
            title,
            slide,
            bar,
            prev_button,
            next_button,
            indicator,
            status,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let layout = ViewerLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.y, 0);
        assert_eq!(layout.slide, Rect::new(0, 1, 80, 21));
        assert_eq!(layout.bar.y, 22);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_buttons_centered_in_bar() {
        let layout = ViewerLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.prev_button.y, layout.bar.y);
        assert_eq!(layout.prev_button.width, BUTTON_WIDTH);
        assert_eq!(layout.next_button.width, BUTTON_WIDTH);
        assert!(layout.prev_button.right() <= layout.next_button.x);

        let left_gap = layout.prev_button.x - layout.bar.x;
        let right_gap = layout.bar.right() - layout.next_button.right();
        assert!(left_gap.abs_diff(right_gap) <= 1);
    }

    #[test]
    fn test_indicator_on_right() {
        let layout = ViewerLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.indicator.right(), layout.bar.right());
        assert!(layout.indicator.x >= layout.next_button.right());
    }
}
