/// Diagnostic log sink for the business layer. Distinct from [`Notifier`],
/// whose messages are shown to the shopper.
///
/// [`Notifier`]: crate::domain::notifier::Notifier
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
