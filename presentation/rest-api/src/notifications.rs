use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use business::domain::notifier::{Notifier, Severity};

const DEFAULT_CAPACITY: usize = 50;

tokio::task_local! {
    static CAPTURED: RefCell<Vec<Toast>>;
}

/// Toast raised by the cart, waiting to be shown by the frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Bounded queue of pending toasts; once full, the oldest toast is dropped.
///
/// Toasts raised inside [`ToastQueue::capture`] go to that caller instead of
/// the shared queue, so each mutation answers with its own failures. The
/// shared queue only collects toasts raised outside a request and is drained
/// by `GET /cart`.
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Toast>>,
    capacity: usize,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn drain(&self) -> Vec<Toast> {
        let mut toasts = self
            .toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        toasts.drain(..).collect()
    }

    /// Runs `future` and returns the toasts it raised alongside its output.
    pub async fn capture<F: Future>(future: F) -> (F::Output, Vec<Toast>) {
        CAPTURED
            .scope(RefCell::new(Vec::new()), async move {
                let output = future.await;
                let toasts = CAPTURED.with(|captured| captured.take());
                (output, toasts)
            })
            .await
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, severity: Severity, message: &str) {
        tracing::warn!(target: "toast", %severity, "{}", message);

        let toast = Toast {
            severity,
            message: message.to_string(),
            created_at: Utc::now(),
        };
        if CAPTURED
            .try_with(|captured| captured.borrow_mut().push(toast.clone()))
            .is_ok()
        {
            return;
        }

        let mut toasts = self
            .toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if toasts.len() == self.capacity {
            toasts.pop_front();
        }
        toasts.push_back(toast);
    }
}
