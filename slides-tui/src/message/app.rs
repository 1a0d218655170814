//! 应用主消息枚举

use slides_core::Input;

use super::FormMessage;
use crate::backend::LoadOutcome;

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// URL 表单子消息
    Form(FormMessage),

    /// 放映中的导航输入（按键或按钮点击）
    Viewer(Input),

    /// 放弃正在进行的加载，回到表单
    CancelLoad,

    /// 后台加载结束
    Loaded(LoadOutcome),

    /// 时钟节拍，推进过渡计时
    Tick,

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 无操作
    Noop,
}

/// Update 产生的副作用，由主循环执行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载 `url`，结果以 `id` 回传
    Load { id: u64, url: String },
}
