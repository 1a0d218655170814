//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))      // 渲染 UI
//!     if app.should_quit { break }
//!     backend.try_recv() → AppMessage::Loaded       // 收取已完成的加载
//!     poll_event(timeout) → handle_event → update   // 等待输入
//!     update(AppMessage::Tick)                      // 推进过渡计时
//!     Command → backend.request(..)                 // 执行副作用
//! }
//!
//! 空闲时每 100 ms 醒一次；过渡进行中缩短到一帧，动画才能连续。

use std::time::Duration;

use anyhow::Result;

use crate::backend::LoaderService;
use crate::event;
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const IDLE_POLL: Duration = Duration::from_millis(100);
const FRAME: Duration = Duration::from_millis(16);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    mut backend: LoaderService,
    initial_url: Option<String>,
) -> Result<()> {
    // 命令行给了 URL 就直接开始加载
    if let Some(url) = initial_url {
        app.form.set_input(url.as_str());
        let command = update::start_load(app, url);
        execute(&backend, command);
    }

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取后台结果
        while let Some(outcome) = backend.try_recv() {
            apply(app, &backend, AppMessage::Loaded(outcome));
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(poll_timeout(app))? {
            let msg = event::handle_event(event, app);
            apply(app, &backend, msg);
        }

        // 5. 时钟节拍
        apply(app, &backend, AppMessage::Tick);
    }

    Ok(())
}

fn apply(app: &mut App, backend: &LoaderService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        execute(backend, command);
    }
}

fn execute(backend: &LoaderService, command: Command) {
    match command {
        Command::Load { id, url } => backend.request(id, url),
    }
}

/// 过渡进行中按帧刷新，否则按空闲间隔
fn poll_timeout(app: &App) -> Duration {
    app.screen
        .viewer()
        .and_then(|state| state.navigator.time_until_idle())
        .map_or(IDLE_POLL, |remaining| remaining.min(FRAME))
}
