//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的代码：
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 文件日志
//!     pub mod markup;     // slide 片段 → 终端文本
//!

mod logging;
pub mod markup;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
