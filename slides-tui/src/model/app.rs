//! 应用主状态结构

use slides_core::SlidesConfig;

use super::{FormState, Screen};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前屏幕
    pub screen: Screen,

    /// URL 表单
    pub form: FormState,

    pub config: SlidesConfig,

    /// 终端尺寸 (宽, 高)
    pub viewport: (u16, u16),

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 下一个加载请求的编号
    next_request_id: u64,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: SlidesConfig) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Form,
            form: FormState::new(),
            config,
            viewport: (0, 0),
            status_message: None,
            next_request_id: 1,
        }
    }

    /// 分配一个新的请求编号
    pub const fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SlidesConfig::default())
    }
}
