//! 表单更新

use super::start_load;
use crate::message::{Command, FormMessage};
use crate::model::App;

pub fn update(app: &mut App, msg: FormMessage) -> Option<Command> {
    let form = &mut app.form;
    match msg {
        FormMessage::Input(c) => form.insert(c),
        FormMessage::Backspace => form.backspace(),
        FormMessage::Delete => form.delete(),
        FormMessage::CursorLeft => form.move_left(),
        FormMessage::CursorRight => form.move_right(),
        FormMessage::Home => form.home(),
        FormMessage::End => form.end(),
        FormMessage::Clear => form.clear(),
        FormMessage::Submit => {
            let url = form.submitted_url()?.to_string();
            return Some(start_load(app, url));
        }
    }
    None
}
