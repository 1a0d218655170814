//!
//! src/backend/mod.rs
//! Backend 层：异步加载服务
//!
//! 主循环是同步的（crossterm 轮询），加载是异步的（reqwest）。
//! LoaderService 把加载任务丢进 tokio 运行时，结果经通道送回，
//! 主循环每轮用 `try_recv` 取出并转成 `AppMessage::Loaded`。
//!
//!     request(id, url)  ──spawn──▶  DeckLoader::load(url)
//!                                          │
//!     try_recv()        ◀──channel──  LoadOutcome { id, result }
//!

use std::sync::Arc;

use slides_core::{DeckLoader, DocumentFetcher, LoadResult, Presentation};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// 一次加载的结果
#[derive(Debug)]
pub struct LoadOutcome {
    /// 与请求对应的编号，过期结果据此丢弃
    pub id: u64,
    pub result: LoadResult<Presentation>,
}

/// 加载服务
pub struct LoaderService<F: DocumentFetcher + 'static = slides_core::HttpFetcher> {
    runtime: Handle,
    loader: Arc<DeckLoader<F>>,
    tx: mpsc::UnboundedSender<LoadOutcome>,
    rx: mpsc::UnboundedReceiver<LoadOutcome>,
}

impl<F: DocumentFetcher + 'static> LoaderService<F> {
    pub fn new(runtime: Handle, loader: DeckLoader<F>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            loader: Arc::new(loader),
            tx,
            rx,
        }
    }

    /// 发起加载，立即返回
    pub fn request(&self, id: u64, url: String) {
        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = loader.load(&url).await;
            if let Err(e) = &result {
                log::warn!("[Backend] Loading {url} failed: {e}");
            }
            // 接收端只在退出时关闭
            let _ = tx.send(LoadOutcome { id, result });
        });
    }

    /// 取出一个已完成的结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<LoadOutcome> {
        self.rx.try_recv().ok()
    }
}
