//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!     App
//!      ├── screen: Screen          当前显示哪一屏
//!      │     ├── Form              URL 输入表单
//!      │     ├── Loading { .. }    等待后台加载
//!      │     └── Viewer(..)        放映中（持有 Navigator）
//!      ├── form: FormState         表单内容在各屏之间保留
//!      └── config: SlidesConfig
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod form;
mod screen;
mod viewer;

pub use app::App;
pub use form::FormState;
pub use screen::Screen;
pub use viewer::ViewerState;
