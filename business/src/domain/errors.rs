/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.encode")]
    Encode,
    #[error("storage.decode")]
    Decode,
    #[error("storage.backend")]
    Backend,
}

impl StorageError {
    pub fn encode() -> Self {
        StorageError::Encode
    }
    pub fn decode() -> Self {
        StorageError::Decode
    }
    pub fn backend() -> Self {
        StorageError::Backend
    }
}
