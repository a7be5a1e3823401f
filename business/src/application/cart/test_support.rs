//! Shared doubles for the cart controller tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mockall::mock;

use crate::domain::cart::model::{Cart, CartLineItem};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{Product, ProductId, StockRecord};
use crate::domain::catalog::services::StoreCatalogService;
use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notifier, Severity};
use crate::domain::storage::StorageAccessor;

mock! {
    pub StoreCatalog {}

    #[async_trait]
    impl StoreCatalogService for StoreCatalog {
        async fn get_stock(&self, product_id: ProductId) -> Result<StockRecord, CatalogError>;
        async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
    }
}

mock! {
    pub Notify {}

    impl Notifier for Notify {
        fn notify(&self, severity: Severity, message: &str);
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn silent_notifier() -> Arc<dyn Notifier> {
    let mut notifier = MockNotify::new();
    notifier.expect_notify().returning(|_, _| ());
    Arc::new(notifier)
}

pub fn product(id: u64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Tênis {}", id),
        price: 139.9,
        image: format!("https://rocketseat-cdn.test/tenis-{}.jpg", id),
    }
}

pub fn stock(id: u64, amount: u32) -> StockRecord {
    StockRecord {
        id: ProductId::new(id),
        amount,
    }
}

pub fn line(id: u64, amount: u32) -> CartLineItem {
    CartLineItem {
        product: product(id),
        amount,
    }
}

/// Single-key store holding the JSON text, with switches to simulate a
/// failing backend.
#[derive(Default)]
pub struct MemoryCartStorage {
    value: Mutex<Option<String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryCartStorage {
    pub fn with_cart(cart: &Cart) -> Self {
        Self::with_raw(&serde_json::to_string(cart).unwrap())
    }

    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Mutex::new(Some(raw.to_string())),
            ..Self::default()
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

impl StorageAccessor<Cart> for MemoryCartStorage {
    fn save(&self, data: &Cart) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend);
        }
        let encoded = serde_json::to_string(data).map_err(|_| StorageError::Encode)?;
        *self.value.lock().unwrap() = Some(encoded);
        Ok(())
    }

    fn get(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Backend);
        }
        Ok(self.raw())
    }

    fn get_decoded(&self) -> Result<Option<Cart>, StorageError> {
        match self.get()? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|_| StorageError::Decode),
            None => Ok(None),
        }
    }

    fn delete(&self) -> Result<(), StorageError> {
        *self.value.lock().unwrap() = None;
        Ok(())
    }
}
