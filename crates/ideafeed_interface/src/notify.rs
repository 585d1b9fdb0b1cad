//! Toast delivery.

use ideafeed_core::Toast;
use parking_lot::Mutex;

/// Receives user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Show a toast.
    fn notify(&self, toast: Toast);
}

/// Writes toasts to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        if toast.is_error() {
            tracing::warn!(title = %toast.title, description = %toast.description, "toast");
        } else {
            tracing::info!(title = %toast.title, description = %toast.description, "toast");
        }
    }
}

/// Collects toasts in memory, in delivery order.
///
/// # Examples
///
/// ```
/// use ideafeed_core::Toast;
/// use ideafeed_interface::{Notifier, ToastLog};
///
/// let log = ToastLog::default();
/// log.notify(Toast::post_created());
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.drain()[0].title, "Success!");
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    /// Copy of every toast received so far.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    /// Take every toast received so far.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock())
    }

    /// Number of toasts received.
    pub fn len(&self) -> usize {
        self.toasts.lock().len()
    }

    /// Whether no toast was received.
    pub fn is_empty(&self) -> bool {
        self.toasts.lock().is_empty()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
