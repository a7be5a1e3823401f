use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::ProductId;

pub struct UpdateProductAmountParams {
    pub product_id: ProductId,
    /// Requested quantity as entered by the shopper; anything below 1 is rejected.
    pub amount: i64,
}

/// Contract the UI layer consumes. Failures are surfaced as notifications,
/// never returned.
#[async_trait]
pub trait CartController: Send + Sync {
    /// Current snapshot, in the order products were first added.
    fn cart(&self) -> Cart;

    async fn add_product(&self, product_id: ProductId);

    fn remove_product(&self, product_id: ProductId);

    async fn update_product_amount(&self, params: UpdateProductAmountParams);
}
