//! 屏幕枚举

use super::ViewerState;

/// 当前屏幕
#[derive(Debug, Default)]
pub enum Screen {
    /// URL 输入表单
    #[default]
    Form,

    /// 正在加载
    Loading {
        url: String,
        /// 对应的请求编号
        id: u64,
    },

    /// 放映中
    Viewer(Box<ViewerState>),
}

impl Screen {
    pub fn viewer(&self) -> Option<&ViewerState> {
        match self {
            Self::Viewer(state) => Some(state),
            _ => None,
        }
    }

    pub fn viewer_mut(&mut self) -> Option<&mut ViewerState> {
        match self {
            Self::Viewer(state) => Some(state),
            _ => None,
        }
    }
}
