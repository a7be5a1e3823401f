use std::sync::Arc;

use logger::TracingLogger;
use storage::cart::cart_storage;
use storage::key_value::file::FileKeyValueStore;
use store_api::catalog::StoreCatalogHttp;
use store_api::client::StoreApiClient;

use business::application::cart::controller::CartStateController;

use crate::config::app_config::AppConfig;
use crate::notifications::ToastQueue;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let key_value_store = Arc::new(FileKeyValueStore::open(config.storage.dir.clone())?);
        let cart_storage = Arc::new(cart_storage(key_value_store));

        let store_api_client = StoreApiClient::new(
            config.store_api.base_url.clone(),
            config.store_api.timeout,
        );
        let catalog = Arc::new(StoreCatalogHttp::new(store_api_client));

        let toasts = Arc::new(ToastQueue::new());

        // One cart per session, restored from storage
        let cart_controller = Arc::new(CartStateController::new(
            catalog,
            cart_storage,
            toasts.clone(),
            logger,
        )?);

        let cart_api = crate::api::cart::routes::CartApi::new(cart_controller, toasts);

        Ok(Self {
            health_api,
            cart_api,
        })
    }
}
