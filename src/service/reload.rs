use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use tokio::sync::Notify;

/// Asks the host to throw away its state and start over, like a page reload.
#[derive(Debug, Clone, Default)]
pub struct ReloadSignal {
    signal: Arc<Notify>,
    requested: Arc<AtomicUsize>,
}

impl ReloadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload(&self) {
        self.requested.fetch_add(1, Ordering::SeqCst);
        self.signal.notify_one();
    }

    /// Resolves on the next reload request, or immediately if one is already pending.
    pub async fn wait_for_reload(&self) {
        self.signal.notified().await;
    }

    pub fn reload_count(&self) -> usize {
        self.requested.load(Ordering::SeqCst)
    }
}
