use std::collections::HashMap;
use std::sync::Mutex;

use super::store::{KeyValueError, KeyValueStore};

/// Volatile backend; contents vanish with the process.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let items = self.items.lock().map_err(|_| KeyValueError::LockPoisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let mut items = self.items.lock().map_err(|_| KeyValueError::LockPoisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), KeyValueError> {
        let mut items = self.items.lock().map_err(|_| KeyValueError::LockPoisoned)?;
        items.remove(key);
        Ok(())
    }
}
