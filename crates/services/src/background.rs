//! Fire-and-forget persistence writes.
//!
//! Writes are queued onto a single worker task and never awaited by the
//! interactive flow. The worker runs them one at a time in submission order,
//! so a later snapshot always lands after an earlier one. Failures are logged
//! and dropped.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use storage::repository::StorageError;
use tokio::sync::{mpsc, oneshot};

type Job = Pin<Box<dyn Future<Output = ()> + Send>>;

#[derive(Clone, Default)]
pub struct BackgroundWriter {
    queue: Arc<Mutex<Option<mpsc::UnboundedSender<Job>>>>,
    pending: Arc<AtomicUsize>,
}

/// Decrements the pending count when its write finishes or is dropped.
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn new(pending: &Arc<AtomicUsize>) -> Self {
        pending.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(pending))
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl BackgroundWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `write` behind every write queued before it. A failure is logged
    /// under `label` and otherwise ignored.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, label: &'static str, write: F)
    where
        F: Future<Output = Result<(), StorageError>> + Send + 'static,
    {
        let guard = PendingGuard::new(&self.pending);
        self.enqueue(Box::pin(async move {
            let _guard = guard;
            if let Err(err) = write.await {
                tracing::warn!(write = label, error = %err, "background write failed");
            }
        }));
    }

    /// Number of writes queued or running.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Wait for every write queued so far.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        self.enqueue(Box::pin(async move {
            let _ = done_tx.send(());
        }));
        // Err: the worker went away and dropped whatever was still queued.
        let _ = done_rx.await;
    }

    fn enqueue(&self, job: Job) {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        let mut job = job;
        // A worker from a runtime that has since shut down rejects the send;
        // start a fresh one and retry once.
        for _ in 0..2 {
            let sender = queue.get_or_insert_with(start_worker);
            match sender.send(job) {
                Ok(()) => return,
                Err(mpsc::error::SendError(rejected)) => {
                    job = rejected;
                    *queue = None;
                }
            }
        }
        tracing::warn!("background writer unavailable; write dropped");
    }
}

fn start_worker() -> mpsc::UnboundedSender<Job> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            job.await;
        }
    });
    tx
}
