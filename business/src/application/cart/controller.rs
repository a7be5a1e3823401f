use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::messages::CartOperation;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::{CartController, UpdateProductAmountParams};
use crate::domain::catalog::model::ProductId;
use crate::domain::catalog::services::StoreCatalogService;
use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::storage::StorageAccessor;

/// Owns the session's cart and keeps it mirrored in durable storage.
///
/// Remote lookups run without holding the cart. Validation and the write are
/// then replayed under the lock against the latest snapshot, so overlapping
/// operations cannot commit on top of a stale read.
pub struct CartStateController {
    pub(crate) catalog: Arc<dyn StoreCatalogService>,
    pub(crate) storage: Arc<dyn StorageAccessor<Cart>>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) logger: Arc<dyn Logger>,
    cart: RwLock<Cart>,
}

impl CartStateController {
    /// Restores the cart persisted by a previous session, or starts empty.
    ///
    /// Stored text that no longer decodes is discarded with a warning. Only a
    /// failing storage backend aborts construction.
    pub fn new(
        catalog: Arc<dyn StoreCatalogService>,
        storage: Arc<dyn StorageAccessor<Cart>>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, CartError> {
        let cart = match storage.get_decoded() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(StorageError::Decode) => {
                logger.warn("Persisted cart could not be decoded, starting with an empty cart");
                Cart::new()
            }
            Err(err) => return Err(err.into()),
        };

        logger.info(&format!("Cart restored with {} products", cart.len()));

        Ok(Self {
            catalog,
            storage,
            notifier,
            logger,
            cart: RwLock::new(cart),
        })
    }

    pub(crate) fn snapshot(&self) -> Cart {
        self.read_cart().clone()
    }

    /// Applies `mutate` to the current snapshot and, when it yields a new
    /// cart, persists it before swapping it in. `Ok(None)` leaves everything
    /// untouched.
    ///
    /// The write guard spans the synchronous storage call, never an `.await`.
    pub(crate) fn commit<F>(&self, mutate: F) -> Result<Option<Cart>, CartError>
    where
        F: FnOnce(&Cart) -> Result<Option<Cart>, CartError>,
    {
        let mut current = self.write_cart();

        let Some(next) = mutate(&current)? else {
            return Ok(None);
        };

        self.storage.save(&next)?;
        *current = next.clone();

        Ok(Some(next))
    }

    pub(crate) fn report_failure(&self, operation: CartOperation, product_id: ProductId, error: &CartError) {
        self.logger.warn(&format!(
            "Cart operation {} failed for product {}: {}",
            operation, product_id, error
        ));
        self.notifier.error(operation.failure_message(error));
    }

    fn read_cart(&self) -> RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_cart(&self) -> RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CartController for CartStateController {
    fn cart(&self) -> Cart {
        self.snapshot()
    }

    async fn add_product(&self, product_id: ProductId) {
        self.logger
            .info(&format!("Adding product {} to cart", product_id));

        match self.try_add_product(product_id).await {
            Ok(cart) => self.logger.info(&format!(
                "Product {} added, cart holds {} units",
                product_id,
                cart.total_units()
            )),
            Err(err) => self.report_failure(CartOperation::AddProduct, product_id, &err),
        }
    }

    fn remove_product(&self, product_id: ProductId) {
        self.logger
            .info(&format!("Removing product {} from cart", product_id));

        match self.try_remove_product(product_id) {
            Ok(cart) => self.logger.info(&format!(
                "Product {} removed, {} products left",
                product_id,
                cart.len()
            )),
            Err(err) => self.report_failure(CartOperation::RemoveProduct, product_id, &err),
        }
    }

    async fn update_product_amount(&self, params: UpdateProductAmountParams) {
        let product_id = params.product_id;
        self.logger.info(&format!(
            "Updating product {} amount to {}",
            product_id, params.amount
        ));

        match self.try_update_product_amount(params).await {
            Ok(cart) => self.logger.info(&format!(
                "Product {} amount set to {}",
                product_id,
                cart.quantity_of(product_id)
            )),
            Err(err) => {
                self.report_failure(CartOperation::UpdateProductAmount, product_id, &err)
            }
        }
    }
}
