//! 放映状态

use std::time::Duration;

use slides_core::{Navigator, Presentation, SystemClock};

use crate::util::markup::{SlideLine, fragment_to_lines};

/// 一份已加载的演示及其导航器
#[derive(Debug)]
pub struct ViewerState {
    pub presentation: Presentation,
    pub navigator: Navigator<SystemClock>,
    /// 每张 slide 预先转换好的文本行
    pub texts: Vec<Vec<SlideLine>>,
}

impl ViewerState {
    pub fn new(presentation: Presentation, transition: Duration) -> Self {
        let texts = presentation.slides.iter().map(fragment_to_lines).collect();
        let navigator = Navigator::new(presentation.slides.count(), transition, SystemClock);
        Self {
            presentation,
            navigator,
            texts,
        }
    }

    /// 标题栏文字：文档标题，缺省为来源 URL
    pub fn title(&self) -> String {
        self.presentation
            .title
            .clone()
            .unwrap_or_else(|| self.presentation.source.to_string())
    }

    pub fn lines(&self, index: usize) -> &[SlideLine] {
        self.texts.get(index).map_or(&[], Vec::as_slice)
    }
}
