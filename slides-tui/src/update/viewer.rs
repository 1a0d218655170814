//! 放映更新：导航输入与加载结果

use slides_core::{Input, Routed, dispatch};

use crate::backend::LoadOutcome;
use crate::model::{App, Screen, ViewerState};

/// 交给 `dispatch`，`Exit` 时回到表单
pub fn handle_input(app: &mut App, input: Input) {
    let Some(state) = app.screen.viewer_mut() else {
        return;
    };

    match dispatch(&mut state.navigator, input) {
        Routed::Exit => {
            log::debug!("[Update] Leaving presentation");
            app.screen = Screen::Form;
            app.clear_status();
        }
        Routed::Navigated { accepted: true } => {
            log::debug!("[Update] Slide {}", state.navigator.position());
        }
        Routed::Navigated { accepted: false } | Routed::Dropped | Routed::Ignored => {}
    }
}

/// 只接受与当前加载屏编号一致的结果，过期结果丢弃
pub fn handle_loaded(app: &mut App, outcome: LoadOutcome) {
    let expected = match &app.screen {
        Screen::Loading { id, .. } => Some(*id),
        _ => None,
    };
    if expected != Some(outcome.id) {
        log::debug!("[Update] Discarding stale load result {}", outcome.id);
        return;
    }

    match outcome.result {
        Ok(presentation) => {
            log::info!(
                "[Update] Presenting {} slides from {}",
                presentation.slides.count(),
                presentation.source
            );
            let state = ViewerState::new(presentation, app.config.transition());
            app.clear_status();
            app.screen = Screen::Viewer(Box::new(state));
        }
        Err(e) => {
            app.form.error = Some(format!("Error: {e}"));
            app.screen = Screen::Form;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use slides_core::{ExtractionError, Key, LoadError, NavButton, Presentation, SlideSequence};
    use url::Url;

    use super::*;
    use crate::update::start_load;

    fn presentation(count: usize) -> Presentation {
        Presentation {
            slides: SlideSequence::new(
                (0..count).map(|i| format!("<section>{i}</section>")).collect(),
            )
            .unwrap(),
            head: String::new(),
            title: Some("Deck".into()),
            source: Url::parse("https://example.com/").unwrap(),
        }
    }

    fn loaded_app(count: usize) -> App {
        let mut app = App::default();
        app.form.set_input("example.com");
        start_load(&mut app, "example.com".into());
        handle_loaded(
            &mut app,
            LoadOutcome {
                id: 1,
                result: Ok(presentation(count)),
            },
        );
        app
    }

    fn current(app: &App) -> usize {
        app.screen.viewer().unwrap().navigator.state().current_index()
    }

    #[test]
    fn test_loaded_opens_viewer() {
        let app = loaded_app(3);
        let state = app.screen.viewer().unwrap();
        assert_eq!(state.texts.len(), 3);
        assert_eq!(state.title(), "Deck");
        assert_eq!(state.navigator.position().to_string(), "1 / 3");
    }

    #[test]
    fn test_stale_result_discarded() {
        let mut app = App::default();
        start_load(&mut app, "a.com".into());
        start_load(&mut app, "b.com".into());
        handle_loaded(
            &mut app,
            LoadOutcome {
                id: 1,
                result: Ok(presentation(2)),
            },
        );
        assert!(matches!(app.screen, Screen::Loading { .. }));
    }

    #[test]
    fn test_result_after_cancel_discarded() {
        let mut app = App::default();
        start_load(&mut app, "a.com".into());
        app.screen = Screen::Form;
        handle_loaded(
            &mut app,
            LoadOutcome {
                id: 1,
                result: Ok(presentation(2)),
            },
        );
        assert!(matches!(app.screen, Screen::Form));
    }

    #[test]
    fn test_error_returns_to_form() {
        let mut app = App::default();
        start_load(&mut app, "a.com".into());
        handle_loaded(
            &mut app,
            LoadOutcome {
                id: 1,
                result: Err(LoadError::Extraction(ExtractionError::NoSections)),
            },
        );
        assert!(matches!(app.screen, Screen::Form));
        assert_eq!(app.form.error.as_deref(), Some("Error: no sections found"));
    }

    #[test]
    fn test_navigation_and_lock() {
        let mut app = loaded_app(3);
        handle_input(&mut app, Input::Key(Key::ArrowRight));
        assert_eq!(current(&app), 1);

        // 过渡期间的输入被丢弃
        handle_input(&mut app, Input::Click(NavButton::Next));
        assert_eq!(current(&app), 1);
    }

    #[test]
    fn test_escape_returns_to_form() {
        let mut app = loaded_app(2);
        handle_input(&mut app, Input::Key(Key::Escape));
        assert!(matches!(app.screen, Screen::Form));
        assert_eq!(app.form.input, "example.com");
    }

    #[test]
    fn test_input_outside_viewer_ignored() {
        let mut app = App::default();
        handle_input(&mut app, Input::Key(Key::ArrowRight));
        assert!(matches!(app.screen, Screen::Form));
    }
}
