use crate::application::cart::controller::CartStateController;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::{Product, ProductId};

impl CartStateController {
    pub(crate) async fn try_add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let stock = self.catalog.get_stock(product_id).await?;

        // Fail fast before fetching the catalog entry; the commit re-checks.
        if stock.amount <= self.snapshot().quantity_of(product_id) {
            return Err(CartError::OutOfStock);
        }

        let mut product: Option<Product> = None;
        loop {
            if product.is_none() && !self.snapshot().contains(product_id) {
                self.logger.debug(&format!(
                    "Fetching catalog entry for product {}",
                    product_id
                ));
                product = Some(self.catalog.get_product(product_id).await?);
            }

            let committed = self.commit(|cart| {
                // Line removed since the snapshot was taken; fetch and retry.
                if product.is_none() && !cart.contains(product_id) {
                    return Ok(None);
                }
                cart.with_added_unit(&stock, product.as_ref()).map(Some)
            })?;

            if let Some(cart) = committed {
                return Ok(cart);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::cart::test_support::{
        MemoryCartStorage, MockNotify, MockStoreCatalog, line, mock_logger, product, silent_notifier,
        stock,
    };
    use crate::domain::cart::messages::{ADD_FAILED, OUT_OF_STOCK};
    use crate::domain::cart::use_cases::CartController;
    use crate::domain::catalog::errors::CatalogError;
    use crate::domain::errors::StorageError;
    use crate::domain::notifier::Severity;
    use crate::domain::storage::StorageAccessor;

    fn controller(
        catalog: MockStoreCatalog,
        storage: Arc<MemoryCartStorage>,
        notifier: MockNotify,
    ) -> CartStateController {
        CartStateController::new(Arc::new(catalog), storage, Arc::new(notifier), mock_logger())
            .unwrap()
    }

    fn expect_toast(message: &'static str) -> MockNotify {
        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(move |severity, text| *severity == Severity::Error && text == message)
            .times(1)
            .returning(|_, _| ());
        notifier
    }

    #[tokio::test]
    async fn should_append_product_when_cart_empty() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 5)));
        catalog.expect_get_product().times(1).returning(|_| {
            Ok(Product {
                title: "Shoe".to_string(),
                price: 10.0,
                ..product(1)
            })
        });
        let storage = Arc::new(MemoryCartStorage::default());

        let controller = controller(catalog, storage.clone(), MockNotify::new());
        controller.add_product(ProductId::new(1)).await;

        let cart = controller.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product.title, "Shoe");
        assert_eq!(cart.items()[0].product.price, 10.0);
        assert_eq!(cart.items()[0].amount, 1);
        assert_eq!(storage.get_decoded().unwrap(), Some(cart));
    }

    #[tokio::test]
    async fn should_increment_without_fetching_product_when_already_in_cart() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 5)));
        catalog.expect_get_product().never();
        let storage = Arc::new(MemoryCartStorage::with_cart(&Cart::from_items(vec![line(1, 2)])));

        let controller = controller(catalog, storage.clone(), MockNotify::new());
        controller.add_product(ProductId::new(1)).await;

        assert_eq!(controller.cart().quantity_of(ProductId::new(1)), 3);
        assert_eq!(storage.get_decoded().unwrap(), Some(controller.cart()));
    }

    #[tokio::test]
    async fn should_notify_out_of_stock_when_cart_holds_all_units() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 5)));
        catalog.expect_get_product().never();
        let initial = Cart::from_items(vec![line(1, 5)]);
        let storage = Arc::new(MemoryCartStorage::with_cart(&initial));
        let raw_before = storage.raw();

        let controller = controller(catalog, storage.clone(), expect_toast(OUT_OF_STOCK));
        controller.add_product(ProductId::new(1)).await;

        assert_eq!(controller.cart(), initial);
        assert_eq!(storage.raw(), raw_before);
    }

    #[tokio::test]
    async fn should_notify_out_of_stock_when_stock_is_zero() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 0)));
        catalog.expect_get_product().never();

        let controller = controller(
            catalog,
            Arc::new(MemoryCartStorage::default()),
            expect_toast(OUT_OF_STOCK),
        );
        controller.add_product(ProductId::new(1)).await;

        assert!(controller.cart().is_empty());
    }

    #[tokio::test]
    async fn should_notify_add_failed_when_stock_lookup_fails() {
        let mut catalog = MockStoreCatalog::new();
        catalog
            .expect_get_stock()
            .returning(|_| Err(CatalogError::Unavailable));

        let controller = controller(
            catalog,
            Arc::new(MemoryCartStorage::default()),
            expect_toast(ADD_FAILED),
        );
        controller.add_product(ProductId::new(1)).await;

        assert!(controller.cart().is_empty());
    }

    #[tokio::test]
    async fn should_notify_add_failed_when_product_missing_from_catalog() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(7, 3)));
        catalog
            .expect_get_product()
            .returning(|_| Err(CatalogError::NotFound));

        let controller = controller(
            catalog,
            Arc::new(MemoryCartStorage::default()),
            expect_toast(ADD_FAILED),
        );
        controller.add_product(ProductId::new(7)).await;

        assert!(controller.cart().is_empty());
    }

    #[tokio::test]
    async fn should_notify_add_failed_and_keep_cart_when_storage_fails() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 5)));
        catalog.expect_get_product().returning(|_| Ok(product(1)));
        let storage = Arc::new(MemoryCartStorage::default());
        storage.fail_writes();

        let controller = controller(catalog, storage.clone(), expect_toast(ADD_FAILED));
        controller.add_product(ProductId::new(1)).await;

        assert!(controller.cart().is_empty());
        assert_eq!(storage.raw(), None);
    }

    #[tokio::test]
    async fn should_recheck_stock_at_commit() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 1)));
        catalog.expect_get_product().returning(|_| Ok(product(1)));

        let controller = controller(
            catalog,
            Arc::new(MemoryCartStorage::default()),
            MockNotify::new(),
        );

        // Stock read before a concurrent add landed.
        let first = controller.try_add_product(ProductId::new(1)).await;
        let stale = controller.commit(|cart| cart.with_added_unit(&stock(1, 1), None).map(Some));

        assert!(first.is_ok());
        assert_eq!(stale, Err(CartError::OutOfStock));
        assert_eq!(controller.cart().quantity_of(ProductId::new(1)), 1);
    }

    #[tokio::test]
    async fn should_cap_overlapping_adds_at_available_stock() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 2)));
        catalog.expect_get_product().returning(|_| Ok(product(1)));

        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(|_, text| text == OUT_OF_STOCK)
            .times(2)
            .returning(|_, _| ());

        let controller = controller(catalog, Arc::new(MemoryCartStorage::default()), notifier);

        tokio::join!(
            controller.add_product(ProductId::new(1)),
            controller.add_product(ProductId::new(1)),
            controller.add_product(ProductId::new(1)),
            controller.add_product(ProductId::new(1)),
        );

        assert_eq!(controller.cart().quantity_of(ProductId::new(1)), 2);
    }

    #[tokio::test]
    async fn should_report_storage_error_from_try_add() {
        let mut catalog = MockStoreCatalog::new();
        catalog.expect_get_stock().returning(|_| Ok(stock(1, 5)));
        catalog.expect_get_product().returning(|_| Ok(product(1)));
        let storage = Arc::new(MemoryCartStorage::default());
        storage.fail_writes();

        let controller = CartStateController::new(
            Arc::new(catalog),
            storage,
            silent_notifier(),
            mock_logger(),
        )
        .unwrap();

        let result = controller.try_add_product(ProductId::new(1)).await;

        assert_eq!(result, Err(CartError::Storage(StorageError::Backend)));
    }
}
