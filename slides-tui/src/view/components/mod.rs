//! 共用部件

pub mod indicator;
pub mod statusbar;
