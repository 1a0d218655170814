//! Section Slides TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回需要执行的 `Command`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 异步加载 (`backend/`)
//!
//! main.rs 的执行顺序：
//!
//! ```text
//! Cli::parse()            // 命令行参数
//! SlidesConfig::load()    // 配置文件（可选）
//! init_logging()          // 日志写入文件，终端处于 raw mode
//! init_terminal()         // 进入备用屏幕
//! app::run()              // 主循环
//! restore_terminal()      // 无论成功与否，都恢复终端
//! ```

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use slides_core::{DeckLoader, SlidesConfig};

use backend::LoaderService;
use cli::Cli;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 配置
    let config = SlidesConfig::load(cli.config.as_deref())?;

    // 2. 日志（guard 需存活到退出）
    let _log_guard = init_logging(cli.log_file.as_deref())?;
    tracing::info!("Starting Section Slides (transition {} ms)", config.transition_ms);

    // 3. 异步运行时与加载器
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let loader = DeckLoader::from_config(&config)?;
    let backend = LoaderService::new(runtime.handle().clone(), loader);

    // 4. 应用实例
    let mut app = model::App::new(config);
    view::theme::set_theme(app.config.theme);

    // 5. 终端
    let mut terminal = init_terminal()?;
    let (width, height) = crossterm::terminal::size()?;
    app.viewport = (width, height);

    // 6. 主循环
    let result = app::run(&mut terminal, &mut app, backend, cli.url);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Section Slides exited");
    result
}
