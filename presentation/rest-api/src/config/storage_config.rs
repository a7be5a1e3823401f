use std::env;
use std::path::PathBuf;

/// Location of the durable key-value store holding the cart
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - CART_STORAGE_DIR: directory for stored values (default: ".storage")
    pub fn from_env() -> Self {
        let dir = env::var("CART_STORAGE_DIR").unwrap_or_else(|_| ".storage".to_string());
        Self {
            dir: PathBuf::from(dir),
        }
    }
}
