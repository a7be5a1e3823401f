use super::errors::StorageError;

/// Durable accessor bound to a single storage key, holding values of type `D`.
///
/// `get` exposes the raw encoded text while `get_decoded` parses it back into
/// the domain value. Both return `Ok(None)` when nothing is stored.
pub trait StorageAccessor<D>: Send + Sync {
    fn save(&self, data: &D) -> Result<(), StorageError>;
    fn get(&self) -> Result<Option<String>, StorageError>;
    fn get_decoded(&self) -> Result<Option<D>, StorageError>;
    /// Idempotent: deleting an absent value succeeds.
    fn delete(&self) -> Result<(), StorageError>;
}
