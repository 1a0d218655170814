//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要发起加载时返回 `Command`，由主循环交给 Backend 执行，
//! 因此这里不接触网络，也不阻塞。
//!
//!     src/update/mod.rs
//!         mod form;       // 表单子消息、提交
//!         mod viewer;     // 放映导航、加载完成
//!

mod form;
mod viewer;

use crate::message::{AppMessage, Command};
use crate::model::{App, Screen};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::Form(form_msg) => {
            return form::update(app, form_msg);
        }
        AppMessage::Viewer(input) => {
            viewer::handle_input(app, input);
        }
        AppMessage::CancelLoad => {
            if let Screen::Loading { url, .. } = &app.screen {
                log::info!("[Update] Cancelled loading {url}");
                app.screen = Screen::Form;
                app.set_status("Cancelled");
            }
        }
        AppMessage::Loaded(outcome) => {
            viewer::handle_loaded(app, outcome);
        }
        AppMessage::Tick => {
            if let Some(state) = app.screen.viewer_mut() {
                state.navigator.tick();
            }
        }
        AppMessage::Resize(width, height) => {
            app.viewport = (width, height);
        }
        AppMessage::Noop => {}
    }
    None
}

/// 以 `url` 发起加载，切到加载屏
pub fn start_load(app: &mut App, url: String) -> Command {
    let id = app.allocate_request_id();
    log::info!("[Update] Loading {url} (request {id})");
    app.form.error = None;
    app.clear_status();
    app.screen = Screen::Loading {
        url: url.clone(),
        id,
    };
    Command::Load { id, url }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_quit() {
        let mut app = App::default();
        assert!(update(&mut app, AppMessage::Quit).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn test_start_load_allocates_fresh_ids() {
        let mut app = App::default();
        let first = start_load(&mut app, "a.com".into());
        let second = start_load(&mut app, "b.com".into());
        assert_eq!(first, Command::Load { id: 1, url: "a.com".into() });
        assert_eq!(second, Command::Load { id: 2, url: "b.com".into() });
        assert!(matches!(app.screen, Screen::Loading { id: 2, .. }));
    }

    #[test]
    fn test_cancel_load_returns_to_form() {
        let mut app = App::default();
        start_load(&mut app, "a.com".into());
        update(&mut app, AppMessage::CancelLoad);
        assert!(matches!(app.screen, Screen::Form));
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = App::default();
        update(&mut app, AppMessage::Resize(120, 30));
        assert_eq!(app.viewport, (120, 30));
    }
}
