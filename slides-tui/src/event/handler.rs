//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use slides_core::{Input, NavButton};

use crate::event::keymap::{DefaultKeymap, viewer_key};
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, Screen};
use crate::view::ViewerLayout;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match &app.screen {
        Screen::Form => handle_form_keys(key),
        Screen::Loading { .. } => {
            if DefaultKeymap::CANCEL.matches(&key) {
                AppMessage::CancelLoad
            } else {
                AppMessage::Noop
            }
        }
        Screen::Viewer(_) => handle_viewer_keys(key),
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Form(FormMessage::Clear);
    }

    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
    let msg = match key.code {
        KeyCode::Char(c) if plain => FormMessage::Input(c),
        KeyCode::Backspace => FormMessage::Backspace,
        KeyCode::Delete => FormMessage::Delete,
        KeyCode::Left => FormMessage::CursorLeft,
        KeyCode::Right => FormMessage::CursorRight,
        KeyCode::Home => FormMessage::Home,
        KeyCode::End => FormMessage::End,
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

fn handle_viewer_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::VIEWER_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // Ctrl/Alt 组合不参与导航
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return AppMessage::Noop;
    }
    AppMessage::Viewer(Input::Key(viewer_key(key.code)))
}

/// 处理鼠标事件：只认放映屏上按钮的左键按下
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return AppMessage::Noop;
    }
    if app.screen.viewer().is_none() {
        return AppMessage::Noop;
    }

    let (width, height) = app.viewport;
    let layout = ViewerLayout::compute(Rect::new(0, 0, width, height));
    let at = Position::new(mouse.column, mouse.row);

    if layout.prev_button.contains(at) {
        AppMessage::Viewer(Input::Click(NavButton::Prev))
    } else if layout.next_button.contains(at) {
        AppMessage::Viewer(Input::Click(NavButton::Next))
    } else {
        AppMessage::Noop
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::time::Duration;

    use slides_core::{Key, Presentation, SlideSequence};
    use url::Url;

    use super::*;
    use crate::model::ViewerState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn viewer_app() -> App {
        let presentation = Presentation {
            slides: SlideSequence::new(vec!["<section>a</section>".into(), "<section>b</section>".into()])
                .unwrap(),
            head: String::new(),
            title: None,
            source: Url::parse("https://example.com/").unwrap(),
        };
        let mut app = App::default();
        app.viewport = (80, 24);
        app.screen = Screen::Viewer(Box::new(ViewerState::new(
            presentation,
            Duration::from_millis(500),
        )));
        app
    }

    #[test]
    fn test_form_typing() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Form(FormMessage::Clear)
        ));
    }

    #[test]
    fn test_global_quit() {
        let app = App::default();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let app = App::default();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }

    #[test]
    fn test_loading_escape_cancels() {
        let mut app = App::default();
        app.screen = Screen::Loading {
            url: "example.com".into(),
            id: 1,
        };
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::CancelLoad));
        assert!(matches!(handle_event(press(KeyCode::Char('x')), &app), AppMessage::Noop));
    }

    #[test]
    fn test_viewer_keys() {
        let app = viewer_app();
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Viewer(Input::Key(Key::ArrowRight))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Viewer(Input::Key(Key::Space))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Viewer(Input::Key(Key::Escape))
        ));
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
    }

    #[test]
    fn test_click_on_buttons() {
        let app = viewer_app();
        let layout = ViewerLayout::compute(Rect::new(0, 0, 80, 24));
        let click = |x, y| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            })
        };

        assert!(matches!(
            handle_event(click(layout.prev_button.x, layout.prev_button.y), &app),
            AppMessage::Viewer(Input::Click(NavButton::Prev))
        ));
        assert!(matches!(
            handle_event(click(layout.next_button.x, layout.next_button.y), &app),
            AppMessage::Viewer(Input::Click(NavButton::Next))
        ));
        assert!(matches!(handle_event(click(0, 0), &app), AppMessage::Noop));
    }

    #[test]
    fn test_resize() {
        let app = App::default();
        assert!(matches!(
            handle_event(Event::Resize(100, 40), &app),
            AppMessage::Resize(100, 40)
        ));
    }
}
