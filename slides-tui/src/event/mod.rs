//!
//! src/event/mod.rs
//! Event 层：把 crossterm 原始事件翻译成 `AppMessage`
//!
//!     poll_event(timeout)        等待键盘、鼠标或尺寸事件
//!     handle_event(event, app)   按当前屏幕翻译成消息
//!
//! 同一个按键在不同屏幕含义不同：表单里 `q` 是输入字符，放映时是退出；
//! Esc 在表单里清空输入，在加载中取消，在放映中返回表单。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
