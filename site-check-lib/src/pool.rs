//! Worker pool engine for concurrent batch checking.
//!
//! This module implements the fan-out/fan-in core: a bounded pool of worker
//! tasks pulls items off a shared queue, runs the caller's predicate, and
//! sends each `(item, result)` pair over a channel to the calling task.
//! The calling task is the sole owner and writer of the result map, so no
//! lock protects it and duplicate-item writes cannot race.
//!
//! The synchronization barrier is channel closure: the receive loop ends
//! only once every worker has dropped its sender, i.e. once all predicate
//! invocations have completed and reported.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::CheckError;
use crate::types::ResultSet;

/// Run `predicate` over every element of `items` using `workers` tasks.
///
/// Every input element, including duplicates, gets exactly one predicate
/// invocation and contributes exactly one message; duplicate keys collapse
/// last-writer-wins in the aggregated map.
///
/// A panicking predicate aborts the whole batch: the panic surfaces when
/// worker handles are joined and the partial map is discarded.
pub(crate) async fn run_pool<F, Fut>(
    predicate: Arc<F>,
    items: Vec<String>,
    workers: usize,
) -> Result<ResultSet, CheckError>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    let total = items.len();
    let queue = Arc::new(Mutex::new(VecDeque::from(items)));

    // Sized to the batch so workers never block on a full channel.
    let (tx, mut rx) = mpsc::channel::<(String, bool)>(total.max(1));

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        let predicate = Arc::clone(&predicate);
        let queue = Arc::clone(&queue);
        let tx = tx.clone();

        handles.push(tokio::spawn(async move {
            let mut checked = 0usize;
            while let Some(item) = next_item(&queue) {
                let up = predicate(item.clone()).await;
                checked += 1;
                // The receiver outlives all senders, so this only fails if
                // the aggregator itself went away; nothing left to do then.
                if tx.send((item, up)).await.is_err() {
                    break;
                }
            }
            debug!(worker, checked, "worker drained queue");
        }));
    }
    // The workers hold the remaining senders; once they finish, the
    // receive loop below observes closure.
    drop(tx);

    let mut results = ResultSet::with_capacity(total);
    while let Some((item, up)) = rx.recv().await {
        results.insert(item, up);
    }

    for handle in handles {
        if let Err(join_err) = handle.await {
            if join_err.is_panic() {
                let message = panic_message(join_err.into_panic());
                warn!(error = %message, "predicate panicked, aborting batch");
                return Err(CheckError::predicate_failure(message));
            }
            return Err(CheckError::internal(join_err.to_string()));
        }
    }

    Ok(results)
}

/// Pop the next work item, recovering the queue if a worker panicked
/// while holding the lock (cannot happen today: the lock is never held
/// across an await or a predicate call).
fn next_item(queue: &Mutex<VecDeque<String>>) -> Option<String> {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .pop_front()
}

/// Extract a readable message from a panic payload.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "predicate panicked".to_string()
    }
}
