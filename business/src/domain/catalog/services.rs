use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::{Product, ProductId, StockRecord};

/// Service port for the remote stock and product lookups.
///
/// Both lookups are keyed by product id; the store is never asked for its
/// whole collection.
#[async_trait]
pub trait StoreCatalogService: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockRecord, CatalogError>;

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
}
