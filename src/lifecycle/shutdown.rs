//! Shutdown coordination for the service.

use std::future::Future;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Broadcast handle that stops the HTTP server.
///
/// The server holds a receiver from [`Shutdown::subscribe`]. The binary arms
/// it with [`Shutdown::trigger_on`] for SIGTERM; tests call
/// [`Shutdown::trigger`] directly. Dropping the last `Shutdown` also stops
/// every subscribed server.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. A no-op when nobody is subscribed.
    pub fn trigger(&self) {
        if self.tx.send(()).is_ok() {
            tracing::info!(subscribers = self.tx.receiver_count(), "Shutdown triggered");
        }
    }

    /// Fire the signal once `event` resolves.
    pub fn trigger_on<F>(self, event: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(async move {
            event.await;
            self.trigger();
        })
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
