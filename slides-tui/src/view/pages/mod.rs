//! 页面渲染

pub mod form;
pub mod loading;
pub mod viewer;
