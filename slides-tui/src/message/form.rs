//! URL 表单子消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 在光标处插入字符
    Input(char),
    /// 删除光标前一个字符
    Backspace,
    /// 删除光标处字符
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
    /// 清空输入与错误
    Clear,
    /// 提交当前 URL
    Submit,
}
