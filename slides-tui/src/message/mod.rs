//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 键盘、鼠标、加载完成、时钟节拍都先被翻译成 `AppMessage`，
//! Update 层只认 Message，不直接接触 crossterm 事件。
//!
//!     src/message/mod.rs
//!         mod app;        // AppMessage 主消息 + Command
//!         mod form;       // URL 表单子消息
//!
//! Update 需要副作用（发起网络请求）时，不直接调用 Backend，
//! 而是返回一个 `Command`，由主循环执行。
//!

mod app;
mod form;

pub use app::{AppMessage, Command};
pub use form::FormMessage;
