use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyValueError {
    #[error("key_value.io_error")]
    Io(#[from] std::io::Error),
    #[error("key_value.lock_poisoned")]
    LockPoisoned,
}

/// Synchronous string key-value backend, shaped after the browser's
/// `localStorage` (`getItem` / `setItem` / `removeItem`).
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), KeyValueError>;
    /// Succeeds when the key is already absent.
    fn remove_item(&self, key: &str) -> Result<(), KeyValueError>;
}
