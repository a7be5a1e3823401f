/// Severity attached to a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Fire-and-forget channel towards whatever displays toasts to the shopper.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}
