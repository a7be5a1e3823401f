use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::StorageError;
use business::domain::storage::StorageAccessor;

use crate::key_value::store::KeyValueStore;

/// JSON-encoding accessor bound to one key of a [`KeyValueStore`].
pub struct KeyValueAccessor<D> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _value: PhantomData<fn() -> D>,
}

impl<D> KeyValueAccessor<D> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<D> StorageAccessor<D> for KeyValueAccessor<D>
where
    D: Serialize + DeserializeOwned,
{
    fn save(&self, data: &D) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(data).map_err(|_| StorageError::Encode)?;

        self.store.set_item(&self.key, &encoded).map_err(|err| {
            tracing::error!(key = %self.key, error = %err, "Failed to write value");
            StorageError::Backend
        })
    }

    fn get(&self) -> Result<Option<String>, StorageError> {
        self.store.get_item(&self.key).map_err(|err| {
            tracing::error!(key = %self.key, error = %err, "Failed to read value");
            StorageError::Backend
        })
    }

    fn get_decoded(&self) -> Result<Option<D>, StorageError> {
        match self.get()? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|err| {
                tracing::warn!(key = %self.key, error = %err, "Stored value does not decode");
                StorageError::Decode
            }),
            None => Ok(None),
        }
    }

    fn delete(&self) -> Result<(), StorageError> {
        self.store.remove_item(&self.key).map_err(|err| {
            tracing::error!(key = %self.key, error = %err, "Failed to delete value");
            StorageError::Backend
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_value::memory::InMemoryKeyValueStore;
    use crate::key_value::store::KeyValueError;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Preferences {
        currency: String,
        newsletter: bool,
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, KeyValueError> {
            Err(KeyValueError::LockPoisoned)
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), KeyValueError> {
            Err(KeyValueError::LockPoisoned)
        }
        fn remove_item(&self, _key: &str) -> Result<(), KeyValueError> {
            Err(KeyValueError::LockPoisoned)
        }
    }

    fn accessor(store: Arc<dyn KeyValueStore>) -> KeyValueAccessor<Preferences> {
        KeyValueAccessor::new(store, "@RocketShoes:preferences")
    }

    #[test]
    fn should_return_none_when_nothing_saved() {
        let accessor = accessor(Arc::new(InMemoryKeyValueStore::new()));

        assert_eq!(accessor.get().unwrap(), None);
        assert_eq!(accessor.get_decoded().unwrap(), None);
    }

    #[test]
    fn should_expose_raw_json_and_decoded_value() {
        let accessor = accessor(Arc::new(InMemoryKeyValueStore::new()));
        let preferences = Preferences {
            currency: "BRL".to_string(),
            newsletter: true,
        };

        accessor.save(&preferences).unwrap();

        assert_eq!(
            accessor.get().unwrap().as_deref(),
            Some(r#"{"currency":"BRL","newsletter":true}"#)
        );
        assert_eq!(accessor.get_decoded().unwrap(), Some(preferences));
    }

    #[test]
    fn should_fail_decoding_foreign_text() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set_item("@RocketShoes:preferences", "not json").unwrap();

        let result = accessor(store).get_decoded();

        assert_eq!(result, Err(StorageError::Decode));
    }

    #[test]
    fn should_delete_idempotently() {
        let accessor = accessor(Arc::new(InMemoryKeyValueStore::new()));
        accessor
            .save(&Preferences {
                currency: "BRL".to_string(),
                newsletter: false,
            })
            .unwrap();

        accessor.delete().unwrap();
        accessor.delete().unwrap();

        assert_eq!(accessor.get().unwrap(), None);
    }

    #[test]
    fn should_map_backend_failures() {
        let accessor = accessor(Arc::new(BrokenStore));

        assert_eq!(accessor.get(), Err(StorageError::Backend));
        assert_eq!(accessor.delete(), Err(StorageError::Backend));
        assert_eq!(
            accessor.save(&Preferences {
                currency: "BRL".to_string(),
                newsletter: false,
            }),
            Err(StorageError::Backend)
        );
    }

    #[test]
    fn should_isolate_values_by_key() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let first: KeyValueAccessor<u32> = KeyValueAccessor::new(store.clone(), "first");
        let second: KeyValueAccessor<u32> = KeyValueAccessor::new(store, "second");

        first.save(&1).unwrap();

        assert_eq!(first.get_decoded().unwrap(), Some(1));
        assert_eq!(second.get_decoded().unwrap(), None);
    }
}
