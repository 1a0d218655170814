//! Section Slides core
//!
//! 把任意含 `<section>` 的 HTML 文档变成可导航的幻灯片序列。
//!
//! - [`extract`]：从原始 HTML 中切出 section 片段与 `<head>` 内容
//! - [`Navigator`]：幻灯片导航状态机（当前页、上一页、动画锁）
//! - [`dispatch`]：把离散输入映射为导航意图
//! - [`DeckLoader`]：抓取远程页面并组装 [`Presentation`]
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use std::time::Duration;
//! use slides_core::{ManualClock, Navigator, RenderTag};
//!
//! let clock = ManualClock::new();
//! let len = NonZeroUsize::new(3).unwrap();
//! let mut nav = Navigator::new(len, Duration::from_millis(500), clock.clone());
//!
//! assert!(nav.next());
//! assert_eq!(nav.render_tag(0), RenderTag::Prev);
//!
//! clock.advance(Duration::from_millis(500));
//! nav.tick();
//! assert!(nav.is_idle());
//! ```

mod config;
mod deck;
mod error;
mod extract;
mod input;
mod loader;
mod navigation;

pub use config::{ConfigError, SlidesConfig, Theme, TRANSITION_DURATION_MS};
pub use deck::{Presentation, SlideSequence};
pub use error::{ExtractionError, LoadError, LoadResult};
pub use extract::{ExtractedDocument, document_title, extract};
pub use input::{Input, Key, NavButton, NavIntent, Routed, dispatch, route};
pub use loader::{DeckLoader, DocumentFetcher, HttpFetcher, normalize_url};
pub use navigation::{
    Clock, ManualClock, NavigationState, Navigator, Position, RenderTag, SystemClock, render_tag,
};
