//! Debouncer for high-frequency input handlers
//!
//! Delays a handler until input stabilizes. Each trigger cancels the call
//! scheduled by the previous one and schedules a new call `wait` later, so a
//! burst of keystrokes collapses into a single handler run with the last
//! arguments.
//!
//! Cancellation only affects scheduling. Once the wait has elapsed and the
//! handler has started, it runs to completion even if new triggers arrive.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Wait used for the search handler
pub const DEFAULT_SEARCH_WAIT_MS: u64 = 250;

/// Wait used for the dependent-control handler
pub const DEFAULT_CONTROL_WAIT_MS: u64 = 350;

type Handler<A> = Arc<dyn Fn(A) -> BoxFuture<'static, ()> + Send + Sync>;

/// A scheduled handler call that can still be cancelled
struct Pending {
    cancel_token: CancellationToken,
    /// Set once the wait elapsed and the handler began running
    started: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

/// Cancel-and-reschedule wrapper around an async handler.
///
/// Must be triggered from within a tokio runtime.
pub struct Debouncer<A> {
    wait: Duration,
    handler: Handler<A>,
    pending: Option<Pending>,
    /// Handlers superseded by a newer trigger after they had started
    running: Vec<JoinHandle<()>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Creates a debouncer that runs `handler` after `wait` of quiet.
    pub fn new<F, Fut>(wait: Duration, handler: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            wait,
            handler: Arc::new(move |args: A| -> BoxFuture<'static, ()> { handler(args).boxed() }),
            pending: None,
            running: Vec::new(),
        }
    }

    /// Schedule the handler with `args`, replacing any call not yet started.
    pub fn trigger(&mut self, args: A) {
        self.cancel();

        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();
        let started = Arc::new(AtomicBool::new(false));
        let started_flag = Arc::clone(&started);
        let handler = Arc::clone(&self.handler);
        let wait = self.wait;

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    return;
                }

                _ = tokio::time::sleep(wait) => {}
            }

            started_flag.store(true, Ordering::SeqCst);
            handler(args).await;
        });

        self.pending = Some(Pending {
            cancel_token,
            started,
            task,
        });
    }

    /// Drop the scheduled call, if it has not started yet.
    ///
    /// A handler that already started keeps running and is still awaited by
    /// `settle`.
    pub fn cancel(&mut self) {
        self.running.retain(|task| !task.is_finished());

        if let Some(pending) = self.pending.take() {
            pending.cancel_token.cancel();
            if pending.started.load(Ordering::SeqCst) && !pending.task.is_finished() {
                self.running.push(pending.task);
            }
        }
    }

    /// Wait for every started or scheduled call to finish.
    ///
    /// Returns immediately when nothing is scheduled or running.
    pub async fn settle(&mut self) {
        let mut tasks = std::mem::take(&mut self.running);
        if let Some(pending) = self.pending.take() {
            tasks.push(pending.task);
        }

        for task in tasks {
            if let Err(e) = task.await {
                log::error!("Debounced handler failed: {}", e);
            }
        }
    }

    /// Whether a call is scheduled or any handler is still running
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.task.is_finished())
            || self.running.iter().any(|task| !task.is_finished())
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel_token.cancel();
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
